pub mod admin_state;
pub mod app;
pub mod customers_view;
pub mod dashboard_view;
pub mod object_url;
pub mod orders_view;
pub mod primitives;
pub mod products_view;
pub mod support_view;
