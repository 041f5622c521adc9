use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::CustomerId;
use crate::product::ProductId;

/// Unique order identifier, e.g. `ORD-1004`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fulfilment status. Moves forward only; cancellation is allowed until shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    /// Returns true if transitioning from self to `next` is valid.
    pub fn can_transition_to(&self, next: &OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Processing)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Processing, OrderStatus::Shipped)
                | (OrderStatus::Processing, OrderStatus::Cancelled)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
        )
    }

    /// The next step along the happy path, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_cancellable(&self) -> bool {
        self.can_transition_to(&OrderStatus::Cancelled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One product line within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
}

impl OrderLine {
    pub fn subtotal(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn total(&self) -> u64 {
        self.items.iter().map(OrderLine::subtotal).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

/// Everything needed to create an order except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

/// Partial update of an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub customer_name: Option<String>,
    pub items: Option<Vec<OrderLine>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Processing));
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(&OrderStatus::Shipped));

        assert!(OrderStatus::Processing.can_transition_to(&OrderStatus::Shipped));
        assert!(OrderStatus::Processing.can_transition_to(&OrderStatus::Cancelled));

        assert!(OrderStatus::Shipped.can_transition_to(&OrderStatus::Delivered));
        assert!(!OrderStatus::Shipped.can_transition_to(&OrderStatus::Cancelled));

        assert!(!OrderStatus::Delivered.can_transition_to(&OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(&OrderStatus::Pending));
    }

    #[test]
    fn next_follows_happy_path() {
        let mut status = OrderStatus::Pending;
        let mut path = vec![status];
        while let Some(next) = status.next() {
            assert!(status.can_transition_to(&next));
            status = next;
            path.push(status);
        }
        assert_eq!(path.last(), Some(&OrderStatus::Delivered));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn total_sums_lines() {
        let order = Order {
            id: OrderId("ORD-1".into()),
            customer_id: CustomerId("C-001".into()),
            customer_name: "Ravi".into(),
            items: vec![
                OrderLine {
                    product_id: ProductId("P-0001".into()),
                    product_name: "Oil Filter".into(),
                    quantity: 3,
                    unit_price: 12,
                },
                OrderLine {
                    product_id: ProductId("P-0002".into()),
                    product_name: "Spark Plug".into(),
                    quantity: 4,
                    unit_price: 8,
                },
            ],
            status: OrderStatus::Pending,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        assert_eq!(order.total(), 68);
        assert_eq!(order.item_count(), 7);
    }
}
