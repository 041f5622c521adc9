mod components;

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting spare parts admin console");
    dioxus::launch(components::app::App);
}
