use chrono::{DateTime, Utc};

use crate::chat::{ChatId, ChatStatus, Message, MessageId, OutgoingMessage, SupportChat};
use crate::config::AdminConfig;
use crate::customer::{Customer, CustomerId, CustomerPatch, CustomerStatus, NewCustomer};
use crate::error::{AdminError, Result};
use crate::order::{NewOrder, Order, OrderId, OrderPatch, OrderStatus};
use crate::product::{
    check_images, NewProduct, Product, ProductId, ProductPatch, MAX_PRODUCT_IMAGES,
};

/// Derived per-customer figures for the customers table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerStats {
    pub order_count: usize,
    /// Lifetime spend, excluding cancelled orders.
    pub total_spent: u64,
}

/// The single in-memory store behind every screen.
///
/// Volatile by design of the console: nothing here outlives the page.
/// Reads go through the accessors; writes go through the mutators below
/// or through [`AdminState::apply`].
#[derive(Clone, Debug)]
pub struct AdminState {
    products: Vec<Product>,
    orders: Vec<Order>,
    customers: Vec<Customer>,
    chats: Vec<SupportChat>,
    low_stock_threshold: u32,
    next_product_id: u32,
    next_order_id: u32,
    next_customer_id: u32,
    next_chat_id: u32,
    next_message_id: MessageId,
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new(&AdminConfig::default())
    }
}

impl AdminState {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            products: Vec::new(),
            orders: Vec::new(),
            customers: Vec::new(),
            chats: Vec::new(),
            low_stock_threshold: config.low_stock_threshold,
            next_product_id: 1,
            next_order_id: 1001,
            next_customer_id: 1,
            next_chat_id: 1,
            next_message_id: 1,
        }
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    // ─── Products ───────────────────────────────────────────────────────────

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Store a new product. It must carry between one and
    /// [`MAX_PRODUCT_IMAGES`] images.
    pub fn add_product(&mut self, product: NewProduct) -> Result<ProductId> {
        check_images(&product.images)?;
        let id = ProductId(format!("P-{:04}", self.next_product_id));
        self.next_product_id += 1;
        self.products.push(product.into_product(id.clone()));
        Ok(id)
    }

    /// Remove a product. Missing ids are ignored.
    pub fn delete_product(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(index))
    }

    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) -> Result<()> {
        let threshold = self.low_stock_threshold;
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| AdminError::ProductNotFound(id.clone()))?;
        if let Some(images) = &patch.images {
            check_images(images)?;
        }
        patch.apply_to(product, threshold);
        Ok(())
    }

    // ─── Orders ─────────────────────────────────────────────────────────────

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// New orders always start out `Pending`.
    pub fn add_order(&mut self, order: NewOrder) -> OrderId {
        let id = OrderId(format!("ORD-{}", self.next_order_id));
        self.next_order_id += 1;
        self.orders.push(Order {
            id: id.clone(),
            customer_id: order.customer_id,
            customer_name: order.customer_name,
            items: order.items,
            status: OrderStatus::Pending,
            created_at: order.created_at,
        });
        id
    }

    pub fn delete_order(&mut self, id: &OrderId) -> Option<Order> {
        let index = self.orders.iter().position(|o| &o.id == id)?;
        Some(self.orders.remove(index))
    }

    /// Update an order. A status change must be a legal transition; the
    /// patch is rejected as a whole otherwise.
    pub fn update_order(&mut self, id: &OrderId, patch: OrderPatch) -> Result<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| AdminError::OrderNotFound(id.clone()))?;

        if let Some(next) = patch.status {
            if next != order.status && !order.status.can_transition_to(&next) {
                return Err(AdminError::InvalidTransition {
                    from: order.status,
                    to: next,
                });
            }
            order.status = next;
        }
        if let Some(name) = patch.customer_name {
            order.customer_name = name;
        }
        if let Some(items) = patch.items {
            order.items = items;
        }
        Ok(())
    }

    // ─── Customers ──────────────────────────────────────────────────────────

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.id == id)
    }

    pub fn add_customer(&mut self, customer: NewCustomer) -> CustomerId {
        let id = CustomerId(format!("C-{:03}", self.next_customer_id));
        self.next_customer_id += 1;
        self.customers.push(Customer {
            id: id.clone(),
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            city: customer.city,
            status: CustomerStatus::Active,
            joined_at: customer.joined_at,
        });
        id
    }

    /// Remove a customer. Their orders are kept for the books.
    pub fn delete_customer(&mut self, id: &CustomerId) -> Option<Customer> {
        let index = self.customers.iter().position(|c| &c.id == id)?;
        Some(self.customers.remove(index))
    }

    pub fn update_customer(&mut self, id: &CustomerId, patch: CustomerPatch) -> Result<()> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| AdminError::CustomerNotFound(id.clone()))?;
        if let Some(name) = patch.name {
            customer.name = name;
        }
        if let Some(email) = patch.email {
            customer.email = email;
        }
        if let Some(phone) = patch.phone {
            customer.phone = phone;
        }
        if let Some(city) = patch.city {
            customer.city = city;
        }
        if let Some(status) = patch.status {
            customer.status = status;
        }
        Ok(())
    }

    pub fn customer_stats(&self, id: &CustomerId) -> CustomerStats {
        self.orders
            .iter()
            .filter(|o| &o.customer_id == id)
            .fold(CustomerStats::default(), |mut stats, order| {
                stats.order_count += 1;
                if order.status != OrderStatus::Cancelled {
                    stats.total_spent += order.total();
                }
                stats
            })
    }

    // ─── Support chats ──────────────────────────────────────────────────────

    pub fn chats(&self) -> &[SupportChat] {
        &self.chats
    }

    pub fn chat(&self, id: &ChatId) -> Option<&SupportChat> {
        self.chats.iter().find(|c| &c.id == id)
    }

    pub fn open_chat(&mut self, customer_name: impl Into<String>, now: DateTime<Utc>) -> ChatId {
        let id = ChatId(format!("CH-{:03}", self.next_chat_id));
        self.next_chat_id += 1;
        self.chats.push(SupportChat::new(id.clone(), customer_name, now));
        id
    }

    fn chat_mut(&mut self, id: &ChatId) -> Result<&mut SupportChat> {
        self.chats
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| AdminError::ChatNotFound(id.clone()))
    }

    /// Append a message to the conversation it belongs to.
    pub fn send_message(
        &mut self,
        chat_id: &ChatId,
        message: OutgoingMessage,
        now: DateTime<Utc>,
    ) -> Result<MessageId> {
        if message.is_empty() {
            return Err(AdminError::EmptyMessage);
        }
        let id = self.next_message_id;
        let chat = self.chat_mut(chat_id)?;
        chat.push(Message {
            id,
            sender: message.sender,
            text: message.text.trim().to_string(),
            timestamp: now,
            attachments: message.attachments,
        });
        self.next_message_id += 1;
        Ok(id)
    }

    pub fn mark_chat_read(&mut self, id: &ChatId) -> Result<()> {
        self.chat_mut(id)?.unread_count = 0;
        Ok(())
    }

    pub fn set_chat_status(&mut self, id: &ChatId, status: ChatStatus) -> Result<()> {
        self.chat_mut(id)?.status = status;
        Ok(())
    }

    pub fn unread_total(&self) -> u32 {
        self.chats.iter().map(|c| c.unread_count).sum()
    }
}
