use dioxus::prelude::*;

use spares_common::badge::stock_badge;
use spares_common::currency::format_amount;
use spares_common::product::{PartCategory, Product, ProductDraft, ProductId, MAX_PRODUCT_IMAGES};
use spares_common::search::{CategoryFilter, ProductFilter};
use spares_common::Command;

use super::admin_state::{dispatch, use_admin_state, use_config, use_notifier};
use super::primitives::{ConfirmDialog, StatusBadge};

#[component]
pub fn ProductsView() -> Element {
    let state = use_admin_state();
    let config = use_config();
    let notifier = use_notifier();
    let mut search = use_signal(String::new);
    let mut category = use_signal(CategoryFilter::default);
    let mut show_add_product = use_signal(|| false);
    // (id, name) of the product awaiting delete confirmation
    let mut pending_delete = use_signal(|| None::<(ProductId, String)>);

    let filter = ProductFilter::new(search.read().clone(), category.read().clone());
    let state_read = state.read();
    let total = state_read.products().len();
    let products: Vec<Product> = filter
        .apply(state_read.products())
        .into_iter()
        .cloned()
        .collect();
    drop(state_read);

    let category_value = category.read().value().to_string();
    let delete_prompt = pending_delete.read().clone();

    rsx! {
        div { class: "products-view",
            div { class: "page-header",
                h2 { "Products" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_add_product.set(true),
                    "Add Product"
                }
            }

            div { class: "toolbar",
                input {
                    r#type: "search",
                    placeholder: "Search by name, part number or model...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    value: "{category_value}",
                    onchange: move |evt| category.set(CategoryFilter::from_value(&evt.value())),
                    option { value: "all", "All categories" }
                    for cat in PartCategory::all() {
                        option { value: "{cat.label()}", "{cat.label()}" }
                    }
                }
                span { class: "result-count", "Showing {products.len()} of {total}" }
            }

            if products.is_empty() {
                p { class: "empty-state", "No products match your search." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Product" }
                            th { "Category" }
                            th { "Model" }
                            th { "Price" }
                            th { "Stock" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        {products.iter().map(|product| {
                            let price = format_amount(product.price, &config.currency);
                            let image = product.primary_image().map(str::to_string);
                            let target = (product.id.clone(), product.name.clone());
                            rsx! {
                                tr { key: "{product.id}",
                                    td { class: "product-cell",
                                        if let Some(src) = image {
                                            img { class: "thumb", src: "{src}", alt: "{product.name}" }
                                        }
                                        div {
                                            p { class: "product-name", "{product.name}" }
                                            p { class: "part-number", "{product.part_number}" }
                                        }
                                    }
                                    td { "{product.category}" }
                                    td { "{product.model}" }
                                    td { "{price}" }
                                    td { "{product.stock}" }
                                    td { StatusBadge { badge: stock_badge(&product.status) } }
                                    td {
                                        button {
                                            class: "btn btn-ghost",
                                            title: "Delete product",
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

            if *show_add_product.read() {
                AddProductDialog { on_close: move |_| show_add_product.set(false) }
            }

            if let Some((id, name)) = delete_prompt {
                ConfirmDialog {
                    title: "Delete product?",
                    message: format!("{name} will be removed from the catalogue. This cannot be undone."),
                    confirm_label: "Delete",
                    on_confirm: move |_| {
                        if dispatch(state, notifier, Command::DeleteProduct(id.clone())).is_some() {
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

#[component]
fn AddProductDialog(on_close: EventHandler<()>) -> Element {
    let state = use_admin_state();
    let config = use_config();
    let notifier = use_notifier();
    let mut draft = use_signal(ProductDraft::default);

    let images = draft.read().images.clone();
    let can_add_image = draft.read().can_add_image();
    let image_count = images.len();
    let threshold = config.low_stock_threshold;

    let submit = move |_| {
        let result = draft.read().validate(threshold);
        match result {
            Ok(product) => {
                let name = product.name.clone();
                if dispatch(state, notifier, Command::AddProduct(product)).is_some() {
                    notifier.success(format!("{name} added"));
                    draft.set(ProductDraft::default());
                    on_close.call(());
                }
            }
            Err(err) => notifier.report(&err),
        }
    };

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog dialog-wide",
                h3 { "Add Product" }

                div { class: "form-grid",
                    div { class: "form-group",
                        label { "Product Name:" }
                        input {
                            r#type: "text",
                            placeholder: "e.g., Ceramic Front Brake Pads",
                            value: "{draft.read().name}",
                            oninput: move |evt| draft.write().name = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Part Number:" }
                        input {
                            r#type: "text",
                            placeholder: "e.g., BP-4471",
                            value: "{draft.read().part_number}",
                            oninput: move |evt| draft.write().part_number = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Category:" }
                        select {
                            value: "{draft.read().category}",
                            onchange: move |evt| draft.write().category = evt.value(),
                            for cat in PartCategory::all() {
                                option { value: "{cat.label()}", "{cat.label()}" }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { "Vehicle Model:" }
                        input {
                            r#type: "text",
                            placeholder: "e.g., Toyota Corolla 2014-2019",
                            value: "{draft.read().model}",
                            oninput: move |evt| draft.write().model = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Price ({config.currency.symbol()}):" }
                        input {
                            r#type: "number",
                            min: "0",
                            placeholder: "48",
                            value: "{draft.read().price}",
                            oninput: move |evt| draft.write().price = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Stock:" }
                        input {
                            r#type: "number",
                            min: "0",
                            placeholder: "25",
                            value: "{draft.read().stock}",
                            oninput: move |evt| draft.write().stock = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Supplier:" }
                        input {
                            r#type: "text",
                            placeholder: "e.g., Brembo",
                            value: "{draft.read().supplier}",
                            oninput: move |evt| draft.write().supplier = evt.value(),
                        }
                    }
                }

                div { class: "form-group",
                    label { "Description:" }
                    textarea {
                        placeholder: "Fitment notes, materials, warranty...",
                        value: "{draft.read().description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { "Images ({image_count}/{MAX_PRODUCT_IMAGES}). The first one is the primary image." }
                    for (index, url) in images.into_iter().enumerate() {
                        div { class: "image-row", key: "{index}",
                            input {
                                r#type: "url",
                                placeholder: if index == 0 { "Primary image URL" } else { "Image URL" },
                                value: "{url}",
                                oninput: move |evt| draft.write().set_image(index, evt.value()),
                            }
                            if !url.trim().is_empty() {
                                img { class: "thumb", src: "{url}", alt: "preview" }
                            }
                            button {
                                class: "btn btn-ghost",
                                title: "Remove image",
                                onclick: move |_| draft.write().remove_image_slot(index),
                                "✕"
                            }
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        disabled: !can_add_image,
                        onclick: move |_| draft.write().add_image_slot(),
                        "Add Image"
                    }
                }

                div { class: "dialog-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: submit,
                        "Save Product"
                    }
                }
            }
        }
    }
}
