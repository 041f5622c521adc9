use thiserror::Error;

use crate::chat::ChatId;
use crate::customer::CustomerId;
use crate::order::{OrderId, OrderStatus};
use crate::product::ProductId;

/// Everything the console can refuse to do.
///
/// None of these are fatal: the UI turns each one into an error toast and
/// carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    #[error("Customer {0} not found")]
    CustomerNotFound(CustomerId),

    #[error("Conversation {0} not found")]
    ChatNotFound(ChatId),

    #[error("Order cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("{name} is too large ({size}). Maximum size is {limit}")]
    AttachmentTooLarge {
        name: String,
        size: String,
        limit: String,
    },

    #[error("Type a message or attach a file first")]
    EmptyMessage,

    #[error("Please add at least one product image")]
    MissingProductImage,

    #[error("A product can have at most {max} images")]
    TooManyImages { max: usize },

    #[error("Invalid value for {field}")]
    InvalidDraftField { field: &'static str },

    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversize_message_names_the_file() {
        let err = AdminError::AttachmentTooLarge {
            name: "scan.pdf".into(),
            size: "11.0 MB".into(),
            limit: "10.0 MB".into(),
        };
        assert_eq!(
            err.to_string(),
            "scan.pdf is too large (11.0 MB). Maximum size is 10.0 MB"
        );
    }

    #[test]
    fn transition_message_uses_status_labels() {
        let err = AdminError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending,
        };
        assert_eq!(err.to_string(), "Order cannot move from Delivered to Pending");
    }
}
