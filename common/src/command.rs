use chrono::{DateTime, Utc};

use crate::chat::{ChatId, ChatStatus, MessageId, OutgoingMessage};
use crate::customer::{CustomerId, CustomerPatch, NewCustomer};
use crate::error::Result;
use crate::order::{NewOrder, OrderId, OrderPatch};
use crate::product::{NewProduct, ProductId, ProductPatch};
use crate::state::AdminState;

/// Every state change the screens can request.
#[derive(Debug, Clone)]
pub enum Command {
    AddProduct(NewProduct),
    DeleteProduct(ProductId),
    UpdateProduct(ProductId, ProductPatch),
    AddOrder(NewOrder),
    DeleteOrder(OrderId),
    UpdateOrder(OrderId, OrderPatch),
    AddCustomer(NewCustomer),
    DeleteCustomer(CustomerId),
    UpdateCustomer(CustomerId, CustomerPatch),
    SendMessage {
        chat_id: ChatId,
        message: OutgoingMessage,
        at: DateTime<Utc>,
    },
    MarkChatRead(ChatId),
    SetChatStatus(ChatId, ChatStatus),
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddProduct(_) => "add_product",
            Command::DeleteProduct(_) => "delete_product",
            Command::UpdateProduct(..) => "update_product",
            Command::AddOrder(_) => "add_order",
            Command::DeleteOrder(_) => "delete_order",
            Command::UpdateOrder(..) => "update_order",
            Command::AddCustomer(_) => "add_customer",
            Command::DeleteCustomer(_) => "delete_customer",
            Command::UpdateCustomer(..) => "update_customer",
            Command::SendMessage { .. } => "send_message",
            Command::MarkChatRead(_) => "mark_chat_read",
            Command::SetChatStatus(..) => "set_chat_status",
        }
    }
}

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    ProductAdded(ProductId),
    OrderAdded(OrderId),
    CustomerAdded(CustomerId),
    MessageSent(MessageId),
    /// A delete ran; `false` when the id was already gone.
    Deleted(bool),
    Updated,
}

impl AdminState {
    /// Apply a command. This is the one entry point the UI uses to mutate
    /// the store.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        let name = command.name();
        let outcome = match command {
            Command::AddProduct(product) => CommandOutcome::ProductAdded(self.add_product(product)?),
            Command::DeleteProduct(id) => CommandOutcome::Deleted(self.delete_product(&id).is_some()),
            Command::UpdateProduct(id, patch) => {
                self.update_product(&id, patch)?;
                CommandOutcome::Updated
            }
            Command::AddOrder(order) => CommandOutcome::OrderAdded(self.add_order(order)),
            Command::DeleteOrder(id) => CommandOutcome::Deleted(self.delete_order(&id).is_some()),
            Command::UpdateOrder(id, patch) => {
                self.update_order(&id, patch)?;
                CommandOutcome::Updated
            }
            Command::AddCustomer(customer) => {
                CommandOutcome::CustomerAdded(self.add_customer(customer))
            }
            Command::DeleteCustomer(id) => {
                CommandOutcome::Deleted(self.delete_customer(&id).is_some())
            }
            Command::UpdateCustomer(id, patch) => {
                self.update_customer(&id, patch)?;
                CommandOutcome::Updated
            }
            Command::SendMessage {
                chat_id,
                message,
                at,
            } => CommandOutcome::MessageSent(self.send_message(&chat_id, message, at)?),
            Command::MarkChatRead(id) => {
                self.mark_chat_read(&id)?;
                CommandOutcome::Updated
            }
            Command::SetChatStatus(id, status) => {
                self.set_chat_status(&id, status)?;
                CommandOutcome::Updated
            }
        };
        tracing::debug!(command = name, ?outcome, "applied");
        Ok(outcome)
    }
}
