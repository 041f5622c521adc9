use crate::chat::ChatStatus;
use crate::customer::CustomerStatus;
use crate::order::OrderStatus;
use crate::product::StockStatus;

/// Visual style of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Destructive,
    Info,
    Neutral,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Destructive => "badge badge-destructive",
            BadgeVariant::Info => "badge badge-info",
            BadgeVariant::Neutral => "badge badge-neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub variant: BadgeVariant,
    pub label: String,
}

impl Badge {
    fn new(variant: BadgeVariant, label: impl Into<String>) -> Self {
        Self {
            variant,
            label: label.into(),
        }
    }
}

pub fn stock_badge(status: &StockStatus) -> Badge {
    let variant = match status {
        StockStatus::InStock => BadgeVariant::Success,
        StockStatus::LowStock => BadgeVariant::Warning,
        StockStatus::OutOfStock => BadgeVariant::Destructive,
        StockStatus::Other(_) => BadgeVariant::Neutral,
    };
    Badge::new(variant, status.label())
}

pub fn order_badge(status: OrderStatus) -> Badge {
    let variant = match status {
        OrderStatus::Delivered => BadgeVariant::Success,
        OrderStatus::Processing | OrderStatus::Shipped => BadgeVariant::Info,
        OrderStatus::Pending => BadgeVariant::Warning,
        OrderStatus::Cancelled => BadgeVariant::Destructive,
    };
    Badge::new(variant, status.label())
}

pub fn chat_badge(status: ChatStatus) -> Badge {
    let variant = match status {
        ChatStatus::Open => BadgeVariant::Success,
        ChatStatus::Closed => BadgeVariant::Neutral,
    };
    Badge::new(variant, status.label())
}

pub fn customer_badge(status: CustomerStatus) -> Badge {
    let variant = match status {
        CustomerStatus::Active => BadgeVariant::Success,
        CustomerStatus::Inactive => BadgeVariant::Neutral,
    };
    Badge::new(variant, status.label())
}
