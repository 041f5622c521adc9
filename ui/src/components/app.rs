use dioxus::prelude::*;

use spares_common::toast::ToastQueue;
use spares_common::AdminState;

use super::admin_state::{load_config, use_admin_state};
use super::customers_view::CustomersView;
use super::dashboard_view::DashboardView;
use super::orders_view::OrdersView;
use super::primitives::ToastHost;
use super::products_view::ProductsView;
use super::support_view::SupportView;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/products")]
    Products {},
    #[route("/orders")]
    Orders {},
    #[route("/customers")]
    Customers {},
    #[route("/support")]
    Support {},
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| Signal::new(AdminState::demo(&config, chrono::Utc::now())));
    use_context_provider(|| Signal::new(ToastQueue::new()));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let state = use_admin_state();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let unread = state.read().unread_total();

    let tab = |target: Route| {
        if route == target {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        div { class: "admin-app",
            aside { class: "sidebar",
                div { class: "brand",
                    h1 { "SpareHub" }
                    p { "Auto parts admin" }
                }
                nav {
                    button {
                        class: tab(Route::Dashboard {}),
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        "Dashboard"
                    }
                    button {
                        class: tab(Route::Products {}),
                        onclick: move |_| { nav.push(Route::Products {}); },
                        "Products"
                    }
                    button {
                        class: tab(Route::Orders {}),
                        onclick: move |_| { nav.push(Route::Orders {}); },
                        "Orders"
                    }
                    button {
                        class: tab(Route::Customers {}),
                        onclick: move |_| { nav.push(Route::Customers {}); },
                        "Customers"
                    }
                    button {
                        class: tab(Route::Support {}),
                        onclick: move |_| { nav.push(Route::Support {}); },
                        "Support"
                        if unread > 0 {
                            span { class: "nav-count", "{unread}" }
                        }
                    }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

/// Route component: renders the dashboard.
#[component]
fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

/// Route component: renders the product catalogue.
#[component]
fn Products() -> Element {
    rsx! { ProductsView {} }
}

/// Route component: renders the orders table.
#[component]
fn Orders() -> Element {
    rsx! { OrdersView {} }
}

/// Route component: renders the customers table.
#[component]
fn Customers() -> Element {
    rsx! { CustomersView {} }
}

/// Route component: renders the support inbox.
#[component]
fn Support() -> Element {
    rsx! { SupportView {} }
}
