use spares_common::dashboard::DashboardSummary;
use spares_common::order::{OrderId, OrderPatch, OrderStatus};
use spares_common::product::{ProductDraft, ProductId, ProductPatch, StockStatus};
use spares_common::search::{CategoryFilter, ProductFilter};
use spares_common::toast::ToastKind;
use spares_common::{Command, CommandOutcome};
use spares_console_integration::ConsoleHarness;

fn filled_draft() -> ProductDraft {
    ProductDraft {
        name: "Timing Belt Kit".into(),
        part_number: "TB-3318".into(),
        category: "Engine".into(),
        model: "Skoda Octavia 2013-2020".into(),
        price: "135".into(),
        stock: "4".into(),
        supplier: "Gates".into(),
        images: vec!["https://images.example.com/parts/tb-3318.jpg".into()],
        ..Default::default()
    }
}

/// Searching "brake" narrows the seeded catalogue to the two brake parts.
#[test]
fn search_narrows_catalogue() {
    let h = ConsoleHarness::setup();
    let filter = ProductFilter::new("brake", CategoryFilter::All);
    let names: Vec<&str> = filter
        .apply(h.state.products())
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Ceramic Front Brake Pads", "Vented Brake Disc"]);

    let filters_only = ProductFilter::new("", CategoryFilter::from_value("Filters"));
    assert_eq!(filters_only.apply(h.state.products()).len(), 2);
}

/// A draft without any image is refused before it reaches the store.
#[test]
fn add_product_requires_an_image() {
    let mut h = ConsoleHarness::setup();
    let mut draft = filled_draft();
    draft.images = vec!["   ".into()];

    if let Err(err) = draft.validate(h.config.low_stock_threshold) {
        h.toasts.report(&err);
    }

    assert_eq!(h.state.products().len(), 9);
    let toast = h.toasts.last().expect("error toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.text, "Please add at least one product image");
}

#[test]
fn add_product_then_restock() {
    let mut h = ConsoleHarness::setup();
    let new_product = filled_draft()
        .validate(h.config.low_stock_threshold)
        .expect("valid draft");

    let outcome = h.dispatch(Command::AddProduct(new_product));
    let Some(CommandOutcome::ProductAdded(id)) = outcome else {
        panic!("expected ProductAdded, got {outcome:?}");
    };
    assert_eq!(id, ProductId("P-0010".into()));
    assert_eq!(h.state.product(&id).map(|p| p.status.clone()), Some(StockStatus::LowStock));

    h.dispatch(Command::UpdateProduct(
        id.clone(),
        ProductPatch {
            stock: Some(40),
            ..Default::default()
        },
    ));
    assert_eq!(h.state.product(&id).map(|p| p.status.clone()), Some(StockStatus::InStock));
    assert!(h.toasts.is_empty());
}

#[test]
fn deleting_unknown_product_is_a_no_op() {
    let mut h = ConsoleHarness::setup();
    let outcome = h.dispatch(Command::DeleteProduct(ProductId("P-9999".into())));
    assert_eq!(outcome, Some(CommandOutcome::Deleted(false)));
    assert_eq!(h.state.products().len(), 9);
}

/// Pending order walks to delivered; a delivered order can't be cancelled.
#[test]
fn order_lifecycle_and_dashboard() {
    let mut h = ConsoleHarness::setup();
    let id = OrderId("ORD-1004".into());
    let before = DashboardSummary::from_state(&h.state);
    assert_eq!(before.pending_orders, 2);

    for status in [OrderStatus::Processing, OrderStatus::Shipped, OrderStatus::Delivered] {
        let patch = OrderPatch {
            status: Some(status),
            ..Default::default()
        };
        assert_eq!(h.dispatch(Command::UpdateOrder(id.clone(), patch)), Some(CommandOutcome::Updated));
    }

    let cancel = OrderPatch {
        status: Some(OrderStatus::Cancelled),
        ..Default::default()
    };
    assert_eq!(h.dispatch(Command::UpdateOrder(id.clone(), cancel)), None);
    assert_eq!(h.toasts.last().map(|t| t.kind), Some(ToastKind::Error));
    assert_eq!(h.state.order(&id).map(|o| o.status), Some(OrderStatus::Delivered));

    let after = DashboardSummary::from_state(&h.state);
    assert_eq!(after.pending_orders, 1);
    assert_eq!(after.revenue, before.revenue);
}

/// The image bounds hold for commands too, not only for the dialog.
#[test]
fn commands_cannot_break_the_image_limit() {
    let mut h = ConsoleHarness::setup();
    let mut bare = filled_draft()
        .validate(h.config.low_stock_threshold)
        .expect("valid draft");
    bare.images.clear();
    assert_eq!(h.dispatch(Command::AddProduct(bare)), None);
    assert_eq!(h.state.products().len(), 9);

    let id = ProductId("P-0001".into());
    let patch = ProductPatch {
        images: Some(vec!["https://images.example.com/x.jpg".into(); 15]),
        ..Default::default()
    };
    assert_eq!(h.dispatch(Command::UpdateProduct(id.clone(), patch)), None);
    assert_eq!(h.state.product(&id).map(|p| p.images.len()), Some(1));
    assert_eq!(h.toasts.len(), 2);
}
