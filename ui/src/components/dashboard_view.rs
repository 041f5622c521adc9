use dioxus::prelude::*;

use spares_common::badge::{order_badge, stock_badge};
use spares_common::currency::format_amount;
use spares_common::dashboard::DashboardSummary;
use spares_common::product::{Product, StockStatus};

use super::admin_state::{use_admin_state, use_config};
use super::app::Route;
use super::primitives::StatusBadge;

#[component]
pub fn DashboardView() -> Element {
    let state = use_admin_state();
    let config = use_config();
    let nav = use_navigator();

    let state_read = state.read();
    let summary = DashboardSummary::from_state(&state_read);
    let attention: Vec<Product> = state_read
        .products()
        .iter()
        .filter(|p| matches!(p.status, StockStatus::LowStock | StockStatus::OutOfStock))
        .cloned()
        .collect();
    drop(state_read);

    let revenue = format_amount(summary.revenue, &config.currency);

    rsx! {
        div { class: "dashboard",
            h2 { "Dashboard" }

            div { class: "stat-grid",
                div { class: "stat-card",
                    span { class: "stat-label", "Revenue" }
                    span { class: "stat-value", "{revenue}" }
                }
                div { class: "stat-card",
                    span { class: "stat-label", "Orders" }
                    span { class: "stat-value", "{summary.order_count}" }
                    span { class: "stat-note", "{summary.pending_orders} pending" }
                }
                div { class: "stat-card",
                    span { class: "stat-label", "Products" }
                    span { class: "stat-value", "{summary.product_count}" }
                    span { class: "stat-note",
                        "{summary.low_stock} low, {summary.out_of_stock} out of stock"
                    }
                }
                div { class: "stat-card",
                    span { class: "stat-label", "Customers" }
                    span { class: "stat-value", "{summary.customer_count}" }
                }
                div { class: "stat-card",
                    onclick: move |_| { nav.push(Route::Support {}); },
                    span { class: "stat-label", "Open chats" }
                    span { class: "stat-value", "{summary.open_chats}" }
                    span { class: "stat-note", "{summary.unread_messages} unread" }
                }
            }

            div { class: "dashboard-section",
                h3 { "Recent orders" }
                if summary.recent_orders.is_empty() {
                    p { class: "empty-state", "No orders yet." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Order" }
                                th { "Customer" }
                                th { "Total" }
                                th { "Date" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            {summary.recent_orders.iter().map(|order| {
                                let total = format_amount(order.total(), &config.currency);
                                let date = order.created_at.with_timezone(&chrono::Local).format("%d %b %Y").to_string();
                                rsx! {
                                    tr { key: "{order.id}",
                                        td { "{order.id}" }
                                        td { "{order.customer_name}" }
                                        td { "{total}" }
                                        td { "{date}" }
                                        td { StatusBadge { badge: order_badge(order.status) } }
                                    }
                                }
                            })}
                        }
                    }
                }
            }

            div { class: "dashboard-section",
                h3 { "Needs restocking ({attention.len()})" }
                if attention.is_empty() {
                    p { class: "empty-state", "Every product is well stocked." }
                } else {
                    ul { class: "restock-list",
                        {attention.iter().map(|product| {
                            rsx! {
                                li { key: "{product.id}",
                                    span { class: "restock-name", "{product.name}" }
                                    span { class: "restock-part", " {product.part_number} " }
                                    span { class: "restock-stock", "({product.stock} left) " }
                                    StatusBadge { badge: stock_badge(&product.status) }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
