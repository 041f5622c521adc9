use dioxus::prelude::*;

use spares_common::badge::customer_badge;
use spares_common::currency::format_amount;
use spares_common::customer::{Customer, CustomerId, CustomerPatch};
use spares_common::search::customer_matches;
use spares_common::state::CustomerStats;
use spares_common::Command;

use super::admin_state::{dispatch, use_admin_state, use_config, use_notifier};
use super::primitives::{Avatar, ConfirmDialog, StatusBadge};

#[component]
pub fn CustomersView() -> Element {
    let state = use_admin_state();
    let config = use_config();
    let notifier = use_notifier();
    let mut search = use_signal(String::new);
    let mut pending_delete = use_signal(|| None::<(CustomerId, String)>);

    let needle = search.read().clone();
    let state_read = state.read();
    let total = state_read.customers().len();
    // Tuple: (customer, derived order stats)
    let customers: Vec<(Customer, CustomerStats)> = state_read
        .customers()
        .iter()
        .filter(|c| customer_matches(c, &needle))
        .map(|c| (c.clone(), state_read.customer_stats(&c.id)))
        .collect();
    drop(state_read);

    let delete_prompt = pending_delete.read().clone();

    rsx! {
        div { class: "customers-view",
            div { class: "page-header",
                h2 { "Customers" }
            }

            div { class: "toolbar",
                input {
                    r#type: "search",
                    placeholder: "Search by name, email or phone...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                span { class: "result-count", "Showing {customers.len()} of {total}" }
            }

            if customers.is_empty() {
                p { class: "empty-state", "No customers match your search." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Customer" }
                            th { "Contact" }
                            th { "City" }
                            th { "Orders" }
                            th { "Spent" }
                            th { "Joined" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        {customers.iter().map(|(customer, stats)| {
                            let spent = format_amount(stats.total_spent, &config.currency);
                            let joined = customer.joined_at.with_timezone(&chrono::Local).format("%b %Y").to_string();
                            let toggled = customer.status.toggled();
                            let id_toggle = customer.id.clone();
                            let target = (customer.id.clone(), customer.name.clone());
                            rsx! {
                                tr { key: "{customer.id}",
                                    td { class: "customer-cell",
                                        Avatar { name: customer.name.clone() }
                                        span { "{customer.name}" }
                                    }
                                    td {
                                        p { "{customer.email}" }
                                        p { class: "muted", "{customer.phone}" }
                                    }
                                    td { "{customer.city}" }
                                    td { "{stats.order_count}" }
                                    td { "{spent}" }
                                    td { "{joined}" }
                                    td { StatusBadge { badge: customer_badge(customer.status) } }
                                    td { class: "row-actions",
                                        button {
                                            class: "btn btn-secondary",
                                            onclick: move |_| {
                                                let patch = CustomerPatch {
                                                    status: Some(toggled),
                                                    ..Default::default()
                                                };
                                                if dispatch(state, notifier, Command::UpdateCustomer(id_toggle.clone(), patch)).is_some() {
                                                    notifier.success(format!("Customer marked {}", toggled.label()));
                                                }
                                            },
                                            "Mark {toggled.label()}"
                                        }
                                        button {
                                            class: "btn btn-ghost",
                                            onclick: move |_| pending_delete.set(Some(target.clone())),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }

            if let Some((id, name)) = delete_prompt {
                ConfirmDialog {
                    title: "Delete customer?",
                    message: format!("{name} will be removed. Their past orders stay on record."),
                    confirm_label: "Delete",
                    on_confirm: move |_| {
                        if dispatch(state, notifier, Command::DeleteCustomer(id.clone())).is_some() {
                            notifier.success(format!("{name} deleted"));
                        }
                        pending_delete.set(None);
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
