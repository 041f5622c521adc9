//! Mock data the console starts with.

use chrono::{DateTime, Duration, Utc};

use crate::chat::{ChatStatus, OutgoingMessage, Sender};
use crate::config::AdminConfig;
use crate::customer::{CustomerId, CustomerPatch, CustomerStatus, NewCustomer};
use crate::order::{NewOrder, OrderLine, OrderPatch, OrderStatus};
use crate::product::{NewProduct, PartCategory, Product, StockStatus};
use crate::state::AdminState;

struct SeedPart {
    name: &'static str,
    part_number: &'static str,
    category: PartCategory,
    model: &'static str,
    price: u64,
    stock: u32,
    supplier: &'static str,
    image: &'static str,
}

fn parts() -> Vec<SeedPart> {
    vec![
        SeedPart {
            name: "Ceramic Front Brake Pads",
            part_number: "BP-4471",
            category: PartCategory::Brakes,
            model: "Toyota Corolla 2014-2019",
            price: 48,
            stock: 42,
            supplier: "Brembo",
            image: "https://images.example.com/parts/bp-4471.jpg",
        },
        SeedPart {
            name: "Vented Brake Disc",
            part_number: "BD-2210",
            category: PartCategory::Brakes,
            model: "Honda Civic 2016-2021",
            price: 72,
            stock: 6,
            supplier: "ATE",
            image: "https://images.example.com/parts/bd-2210.jpg",
        },
        SeedPart {
            name: "Engine Oil Filter",
            part_number: "OF-1029",
            category: PartCategory::Filters,
            model: "Hyundai i20 / Kia Rio",
            price: 9,
            stock: 180,
            supplier: "Mann-Filter",
            image: "https://images.example.com/parts/of-1029.jpg",
        },
        SeedPart {
            name: "Cabin Air Filter",
            part_number: "CF-5520",
            category: PartCategory::Filters,
            model: "Maruti Swift 2018+",
            price: 14,
            stock: 0,
            supplier: "Bosch",
            image: "https://images.example.com/parts/cf-5520.jpg",
        },
        SeedPart {
            name: "Front Shock Absorber",
            part_number: "SA-8812",
            category: PartCategory::Suspension,
            model: "Volkswagen Polo 2010-2017",
            price: 95,
            stock: 14,
            supplier: "Monroe",
            image: "https://images.example.com/parts/sa-8812.jpg",
        },
        SeedPart {
            name: "Alternator 90A",
            part_number: "AL-3307",
            category: PartCategory::Electrical,
            model: "Ford Focus 2012-2018",
            price: 210,
            stock: 3,
            supplier: "Valeo",
            image: "https://images.example.com/parts/al-3307.jpg",
        },
        SeedPart {
            name: "Iridium Spark Plug",
            part_number: "SP-0716",
            category: PartCategory::Engine,
            model: "Universal 14mm",
            price: 11,
            stock: 260,
            supplier: "NGK",
            image: "https://images.example.com/parts/sp-0716.jpg",
        },
        SeedPart {
            name: "Radiator Assembly",
            part_number: "RD-6640",
            category: PartCategory::Cooling,
            model: "Nissan Qashqai 2014-2020",
            price: 185,
            stock: 8,
            supplier: "Denso",
            image: "https://images.example.com/parts/rd-6640.jpg",
        },
        SeedPart {
            name: "Clutch Kit",
            part_number: "CK-9051",
            category: PartCategory::Transmission,
            model: "Toyota Hilux 2015+",
            price: 320,
            stock: 11,
            supplier: "Exedy",
            image: "https://images.example.com/parts/ck-9051.jpg",
        },
    ]
}

impl AdminState {
    /// A store pre-filled with a small, believable catalogue.
    pub fn demo(config: &AdminConfig, now: DateTime<Utc>) -> Self {
        let mut state = AdminState::new(config);

        for part in parts() {
            let added = state.add_product(NewProduct {
                name: part.name.into(),
                part_number: part.part_number.into(),
                category: part.category,
                model: part.model.into(),
                price: part.price,
                stock: part.stock,
                status: StockStatus::for_stock(part.stock, config.low_stock_threshold),
                images: vec![part.image.into()],
                supplier: part.supplier.into(),
                description: String::new(),
            });
            if let Err(err) = added {
                tracing::warn!("seed product {} skipped: {err}", part.part_number);
            }
        }

        let customers = [
            ("Asha Verma", "asha.verma@example.com", "+1 555 0101", "Austin"),
            ("Ben Okafor", "ben@okafor-motors.example", "+1 555 0102", "Denver"),
            ("Carla Mendes", "carla.mendes@example.com", "+1 555 0103", "Miami"),
            ("Dmitri Volkov", "dvolkov@example.com", "+1 555 0104", "Seattle"),
            ("Emma Lindqvist", "emma.l@example.com", "+1 555 0105", "Boston"),
        ];
        let customer_ids: Vec<CustomerId> = customers
            .iter()
            .enumerate()
            .map(|(i, (name, email, phone, city))| {
                state.add_customer(NewCustomer {
                    name: (*name).into(),
                    email: (*email).into(),
                    phone: (*phone).into(),
                    city: (*city).into(),
                    joined_at: now - Duration::days(400 - 60 * i as i64),
                })
            })
            .collect();
        // Last customer has gone quiet.
        if let Err(err) = state.update_customer(
            &customer_ids[4],
            CustomerPatch {
                status: Some(CustomerStatus::Inactive),
                ..Default::default()
            },
        ) {
            tracing::warn!("seed customer status not applied: {err}");
        }

        let catalogue: Vec<Product> = state.products().to_vec();
        let line = |index: usize, quantity: u32| OrderLine {
            product_id: catalogue[index].id.clone(),
            product_name: catalogue[index].name.clone(),
            quantity,
            unit_price: catalogue[index].price,
        };
        let orders = [
            (0, vec![line(0, 2), line(2, 4)], OrderStatus::Delivered, 9),
            (1, vec![line(5, 1)], OrderStatus::Shipped, 4),
            (2, vec![line(4, 2)], OrderStatus::Processing, 2),
            (0, vec![line(6, 8)], OrderStatus::Pending, 1),
            (3, vec![line(8, 1), line(1, 2)], OrderStatus::Cancelled, 6),
            (2, vec![line(7, 1)], OrderStatus::Pending, 0),
        ];
        for (customer, items, status, days_ago) in orders {
            let id = state.add_order(NewOrder {
                customer_id: customer_ids[customer].clone(),
                customer_name: customers[customer].0.into(),
                items,
                created_at: now - Duration::days(days_ago) - Duration::hours(3),
            });
            advance_to(&mut state, &id, status);
        }

        let conversations: [(&str, &[(Sender, &str, i64)], bool); 4] = [
            (
                "Asha Verma",
                &[
                    (Sender::Customer, "Hi, do the BP-4471 pads fit a 2019 Corolla hybrid?", 95),
                    (Sender::Admin, "Yes, they fit every 2014-2019 Corolla trim.", 90),
                    (Sender::Customer, "Great, ordering two sets now.", 12),
                ],
                true,
            ),
            (
                "Ben Okafor",
                &[
                    (Sender::Customer, "My alternator order hasn't shipped yet.", 240),
                    (Sender::Admin, "It left our warehouse this morning, tracking to follow.", 200),
                ],
                true,
            ),
            (
                "Carla Mendes",
                &[(Sender::Customer, "Can I return an unopened shock absorber?", 30)],
                true,
            ),
            (
                "Dmitri Volkov",
                &[
                    (Sender::Customer, "Please cancel my clutch kit order.", 4000),
                    (Sender::Admin, "Done, the refund is on its way.", 3900),
                ],
                false,
            ),
        ];
        for (name, messages, open) in conversations {
            let first_at = messages
                .first()
                .map(|(_, _, mins)| now - Duration::minutes(*mins))
                .unwrap_or(now);
            let chat_id = state.open_chat(name, first_at);
            for (sender, text, mins) in messages {
                let sent = state.send_message(
                    &chat_id,
                    OutgoingMessage {
                        sender: *sender,
                        text: (*text).into(),
                        attachments: Vec::new(),
                    },
                    now - Duration::minutes(*mins),
                );
                if let Err(err) = sent {
                    tracing::warn!("seed message for {name} dropped: {err}");
                }
            }
            if !open {
                let closed = state
                    .mark_chat_read(&chat_id)
                    .and_then(|()| state.set_chat_status(&chat_id, ChatStatus::Closed));
                if let Err(err) = closed {
                    tracing::warn!("seed chat {chat_id} not closed: {err}");
                }
            }
        }

        state
    }
}

/// Walk an order forward to `target` through legal transitions.
fn advance_to(state: &mut AdminState, id: &crate::order::OrderId, target: OrderStatus) {
    let mut current = OrderStatus::Pending;
    while current != target {
        let next = if target == OrderStatus::Cancelled && current.is_cancellable() {
            OrderStatus::Cancelled
        } else {
            match current.next() {
                Some(next) => next,
                None => return,
            }
        };
        if let Err(err) = state.update_order(
            id,
            OrderPatch {
                status: Some(next),
                ..Default::default()
            },
        ) {
            tracing::warn!("seed order {id} stuck at {current}: {err}");
            return;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn demo_is_consistent() {
        let config = AdminConfig::default();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let state = AdminState::demo(&config, now);

        assert_eq!(state.products().len(), 9);
        assert_eq!(state.customers().len(), 5);
        assert_eq!(state.orders().len(), 6);
        assert_eq!(state.chats().len(), 4);

        for product in state.products() {
            assert_eq!(
                product.status,
                StockStatus::for_stock(product.stock, config.low_stock_threshold)
            );
            assert!(product.primary_image().is_some());
        }

        let statuses: Vec<OrderStatus> = state.orders().iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            [
                OrderStatus::Delivered,
                OrderStatus::Shipped,
                OrderStatus::Processing,
                OrderStatus::Pending,
                OrderStatus::Cancelled,
                OrderStatus::Pending,
            ]
        );

        assert_eq!(
            state.customers().last().map(|c| c.status),
            Some(CustomerStatus::Inactive)
        );
        let message_counts: Vec<usize> = state.chats().iter().map(|c| c.messages.len()).collect();
        assert_eq!(message_counts, [3, 2, 1, 2]);

        let closed = state
            .chats()
            .iter()
            .filter(|c| c.status == ChatStatus::Closed)
            .count();
        assert_eq!(closed, 1);
        assert!(state.unread_total() > 0);
    }
}
