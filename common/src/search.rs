//! Search and filter predicates used by the list screens.
//!
//! All text matching is a case-insensitive substring test; a blank search
//! matches everything.

use crate::chat::SupportChat;
use crate::customer::Customer;
use crate::order::{Order, OrderStatus};
use crate::product::{PartCategory, Product};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn normalized(search: &str) -> String {
    search.trim().to_lowercase()
}

/// Category dropdown value. `All` is the "all" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PartCategory),
}

impl CategoryFilter {
    /// Parse the dropdown value; `"all"` disables the filter.
    pub fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(PartCategory::from_label(value))
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: &PartCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl ProductFilter {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Search over name, part number and model, AND the category filter.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = normalized(&self.search);
        let text_ok = needle.is_empty()
            || contains_ci(&product.name, &needle)
            || contains_ci(&product.part_number, &needle)
            || contains_ci(&product.model, &needle);
        text_ok && self.category.matches(&product.category)
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub search: String,
    /// `None` shows every status.
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    /// Search over order id and customer name, AND the status filter.
    pub fn matches(&self, order: &Order) -> bool {
        let needle = normalized(&self.search);
        let text_ok = needle.is_empty()
            || contains_ci(&order.id.0, &needle)
            || contains_ci(&order.customer_name, &needle);
        text_ok && self.status.is_none_or(|s| s == order.status)
    }

    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

/// Search over name, email and phone.
pub fn customer_matches(customer: &Customer, search: &str) -> bool {
    let needle = normalized(search);
    needle.is_empty()
        || contains_ci(&customer.name, &needle)
        || contains_ci(&customer.email, &needle)
        || contains_ci(&customer.phone, &needle)
}

/// Search the chat list by customer name.
pub fn chat_matches(chat: &SupportChat, search: &str) -> bool {
    let needle = normalized(search);
    needle.is_empty() || contains_ci(&chat.customer_name, &needle)
}
