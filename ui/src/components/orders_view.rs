use dioxus::prelude::*;

use spares_common::badge::order_badge;
use spares_common::currency::format_amount;
use spares_common::order::{Order, OrderId, OrderPatch, OrderStatus};
use spares_common::search::OrderFilter;
use spares_common::Command;

use super::admin_state::{dispatch, use_admin_state, use_config, use_notifier, Notifier};
use super::primitives::{ConfirmDialog, StatusBadge};

fn set_status(
    state: Signal<spares_common::AdminState>,
    notifier: Notifier,
    id: OrderId,
    status: OrderStatus,
) {
    let patch = OrderPatch {
        status: Some(status),
        ..Default::default()
    };
    if dispatch(state, notifier, Command::UpdateOrder(id.clone(), patch)).is_some() {
        notifier.success(format!("{id} marked {status}"));
    }
}

#[component]
pub fn OrdersView() -> Element {
    let state = use_admin_state();
    let config = use_config();
    let notifier = use_notifier();
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<OrderStatus>);
    let mut pending_delete = use_signal(|| None::<OrderId>);

    let filter = OrderFilter {
        search: search.read().clone(),
        status: *status_filter.read(),
    };
    let state_read = state.read();
    let total = state_read.orders().len();
    let mut orders: Vec<Order> = filter
        .apply(state_read.orders())
        .into_iter()
        .cloned()
        .collect();
    drop(state_read);
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let status_value = status_filter
        .read()
        .map(|s| s.label())
        .unwrap_or("all");
    let delete_prompt = pending_delete.read().clone();

    rsx! {
        div { class: "orders-view",
            div { class: "page-header",
                h2 { "Orders" }
            }

            div { class: "toolbar",
                input {
                    r#type: "search",
                    placeholder: "Search by order number or customer...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    value: "{status_value}",
                    onchange: move |evt| status_filter.set(OrderStatus::from_label(&evt.value())),
                    option { value: "all", "All statuses" }
                    for status in OrderStatus::all() {
                        option { value: "{status.label()}", "{status.label()}" }
                    }
                }
                span { class: "result-count", "Showing {orders.len()} of {total}" }
            }

            if orders.is_empty() {
                p { class: "empty-state", "No orders match your search." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Order" }
                            th { "Customer" }
                            th { "Items" }
                            th { "Total" }
                            th { "Date" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        {orders.iter().map(|order| {
                            let total = format_amount(order.total(), &config.currency);
                            let date = order.created_at.with_timezone(&chrono::Local).format("%d %b %Y %H:%M").to_string();
                            let items = order
                                .items
                                .iter()
                                .map(|line| format!("{} x{}", line.product_name, line.quantity))
                                .collect::<Vec<_>>()
                                .join(", ");
                            let next = order.status.next();
                            let cancellable = order.status.is_cancellable();
                            let id_next = order.id.clone();
                            let id_cancel = order.id.clone();
                            let id_delete = order.id.clone();
                            rsx! {
                                tr { key: "{order.id}",
                                    td { class: "order-id", "{order.id}" }
                                    td { "{order.customer_name}" }
                                    td { class: "order-items", title: "{items}", "{order.item_count()} item(s)" }
                                    td { "{total}" }
                                    td { "{date}" }
                                    td { StatusBadge { badge: order_badge(order.status) } }
                                    td { class: "row-actions",
                                        if let Some(next) = next {
                                            button {
                                                class: "btn btn-secondary",
                                                onclick: move |_| set_status(state, notifier, id_next.clone(), next),
                                                "Mark {next}"
                                            }
                                        }
                                        if cancellable {
                                            button {
                                                class: "btn btn-ghost",
                                                onclick: move |_| set_status(state, notifier, id_cancel.clone(), OrderStatus::Cancelled),
                                                "Cancel"
                                            }
                                        }
                                        button {
                                            class: "btn btn-ghost",
                                            onclick: move |_| pending_delete.set(Some(id_delete.clone())),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }

            if let Some(id) = delete_prompt {
                ConfirmDialog {
                    title: "Delete order?",
                    message: format!("Order {id} will be removed permanently."),
                    confirm_label: "Delete",
                    on_confirm: move |_| {
                        if dispatch(state, notifier, Command::DeleteOrder(id.clone())).is_some() {
                            notifier.success(format!("Order {id} deleted"));
                        }
                        pending_delete.set(None);
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
