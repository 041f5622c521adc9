use crate::chat::ChatStatus;
use crate::order::{Order, OrderStatus};
use crate::product::StockStatus;
use crate::state::AdminState;

/// How many orders the dashboard lists under "Recent orders".
pub const RECENT_ORDER_COUNT: usize = 5;

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Sum of all non-cancelled order totals.
    pub revenue: u64,
    pub order_count: usize,
    pub pending_orders: usize,
    pub product_count: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub customer_count: usize,
    pub open_chats: usize,
    pub unread_messages: u32,
    /// Newest first.
    pub recent_orders: Vec<Order>,
}

impl DashboardSummary {
    pub fn from_state(state: &AdminState) -> Self {
        let orders = state.orders();
        let revenue = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(Order::total)
            .sum();

        let mut recent: Vec<&Order> = orders.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Self {
            revenue,
            order_count: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            product_count: state.products().len(),
            low_stock: state
                .products()
                .iter()
                .filter(|p| p.status == StockStatus::LowStock)
                .count(),
            out_of_stock: state
                .products()
                .iter()
                .filter(|p| p.status == StockStatus::OutOfStock)
                .count(),
            customer_count: state.customers().len(),
            open_chats: state
                .chats()
                .iter()
                .filter(|c| c.status == ChatStatus::Open)
                .count(),
            unread_messages: state.unread_total(),
            recent_orders: recent
                .into_iter()
                .take(RECENT_ORDER_COUNT)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::customer::CustomerId;
    use crate::order::{NewOrder, OrderLine, OrderPatch};
    use crate::product::ProductId;

    #[test]
    fn revenue_skips_cancelled_and_recent_is_newest_first() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut state = AdminState::default();
        let mut ids = Vec::new();
        for day in 0..7 {
            ids.push(state.add_order(NewOrder {
                customer_id: CustomerId("C-001".into()),
                customer_name: "Asha".into(),
                items: vec![OrderLine {
                    product_id: ProductId("P-0001".into()),
                    product_name: "Pads".into(),
                    quantity: 1,
                    unit_price: 100,
                }],
                created_at: start + Duration::days(day),
            }));
        }
        state
            .update_order(
                &ids[0],
                OrderPatch {
                    status: Some(OrderStatus::Cancelled),
                    ..Default::default()
                },
            )
            .unwrap();

        let summary = DashboardSummary::from_state(&state);
        assert_eq!(summary.revenue, 600);
        assert_eq!(summary.order_count, 7);
        assert_eq!(summary.pending_orders, 6);
        assert_eq!(summary.recent_orders.len(), RECENT_ORDER_COUNT);
        assert_eq!(summary.recent_orders[0].id, ids[6]);
    }
}
