use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, Result};

/// Maximum number of image URLs a product listing can carry.
pub const MAX_PRODUCT_IMAGES: usize = 10;

/// Unique product identifier, e.g. `P-0007`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of spare part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    Engine,
    Brakes,
    Suspension,
    Electrical,
    Filters,
    Body,
    Transmission,
    Cooling,
    Other(String),
}

impl PartCategory {
    /// Categories offered in the add-product form and the category filter.
    pub fn all() -> &'static [PartCategory] {
        &[
            PartCategory::Engine,
            PartCategory::Brakes,
            PartCategory::Suspension,
            PartCategory::Electrical,
            PartCategory::Filters,
            PartCategory::Body,
            PartCategory::Transmission,
            PartCategory::Cooling,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            PartCategory::Engine => "Engine",
            PartCategory::Brakes => "Brakes",
            PartCategory::Suspension => "Suspension",
            PartCategory::Electrical => "Electrical",
            PartCategory::Filters => "Filters",
            PartCategory::Body => "Body",
            PartCategory::Transmission => "Transmission",
            PartCategory::Cooling => "Cooling",
            PartCategory::Other(label) => label,
        }
    }

    /// Parse a category label as shown in the UI. Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::all()
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .cloned()
            .unwrap_or_else(|| PartCategory::Other(label.to_string()))
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stock level of a product as shown by its badge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    /// A label outside the three known levels, rendered verbatim.
    Other(String),
}

impl StockStatus {
    /// Derive the status from a stock count. `threshold` is the first count
    /// that is no longer considered low.
    pub fn for_stock(stock: u32, threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "In Stock" => StockStatus::InStock,
            "Low Stock" => StockStatus::LowStock,
            "Out of Stock" => StockStatus::OutOfStock,
            other => StockStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A spare part listed in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub part_number: String,
    pub category: PartCategory,
    /// Vehicle model(s) the part fits.
    pub model: String,
    /// Price in whole currency units.
    pub price: u64,
    pub stock: u32,
    pub status: StockStatus,
    /// Ordered image URLs; the first is the primary image.
    pub images: Vec<String>,
    pub supplier: String,
    pub description: String,
}

impl Product {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Everything needed to create a product except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub part_number: String,
    pub category: PartCategory,
    pub model: String,
    pub price: u64,
    pub stock: u32,
    pub status: StockStatus,
    pub images: Vec<String>,
    pub supplier: String,
    pub description: String,
}

impl NewProduct {
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            part_number: self.part_number,
            category: self.category,
            model: self.model,
            price: self.price,
            stock: self.stock,
            status: self.status,
            images: self.images,
            supplier: self.supplier,
            description: self.description,
        }
    }
}

/// A stored product needs a primary image and at most
/// [`MAX_PRODUCT_IMAGES`] in total.
pub fn check_images(images: &[String]) -> Result<()> {
    if images.is_empty() {
        return Err(AdminError::MissingProductImage);
    }
    if images.len() > MAX_PRODUCT_IMAGES {
        return Err(AdminError::TooManyImages {
            max: MAX_PRODUCT_IMAGES,
        });
    }
    Ok(())
}

/// Partial update of a product. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub part_number: Option<String>,
    pub category: Option<PartCategory>,
    pub model: Option<String>,
    pub price: Option<u64>,
    pub stock: Option<u32>,
    pub status: Option<StockStatus>,
    pub images: Option<Vec<String>>,
    pub supplier: Option<String>,
    pub description: Option<String>,
}

impl ProductPatch {
    /// Apply the patch. A stock change without an explicit status re-derives
    /// the status from `low_stock_threshold`.
    pub(crate) fn apply_to(self, product: &mut Product, low_stock_threshold: u32) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(part_number) = self.part_number {
            product.part_number = part_number;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(model) = self.model {
            product.model = model;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        if let Some(supplier) = self.supplier {
            product.supplier = supplier;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        match (self.stock, self.status) {
            (_, Some(status)) => {
                if let Some(stock) = self.stock {
                    product.stock = stock;
                }
                product.status = status;
            }
            (Some(stock), None) => {
                product.stock = stock;
                product.status = StockStatus::for_stock(stock, low_stock_threshold);
            }
            (None, None) => {}
        }
    }
}

/// Raw form fields of the add-product dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub part_number: String,
    pub category: String,
    pub model: String,
    pub price: String,
    pub stock: String,
    pub supplier: String,
    pub description: String,
    /// Image URL inputs in display order. Starts with one empty slot.
    pub images: Vec<String>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            part_number: String::new(),
            category: PartCategory::Engine.label().to_string(),
            model: String::new(),
            price: String::new(),
            stock: String::new(),
            supplier: String::new(),
            description: String::new(),
            images: vec![String::new()],
        }
    }
}

impl ProductDraft {
    /// Whether another image slot may be added.
    pub fn can_add_image(&self) -> bool {
        self.images.len() < MAX_PRODUCT_IMAGES
    }

    pub fn add_image_slot(&mut self) {
        if self.can_add_image() {
            self.images.push(String::new());
        }
    }

    /// Remove the slot at `index`, always leaving at least one slot.
    pub fn remove_image_slot(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
        if self.images.is_empty() {
            self.images.push(String::new());
        }
    }

    pub fn set_image(&mut self, index: usize, url: String) {
        if let Some(slot) = self.images.get_mut(index) {
            *slot = url;
        }
    }

    /// Non-blank image URLs, trimmed, in order.
    pub fn filled_images(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check the draft and turn it into a product ready for the store.
    ///
    /// Images are checked first, matching the order the form reports errors in.
    pub fn validate(&self, low_stock_threshold: u32) -> Result<NewProduct> {
        let images = self.filled_images();
        check_images(&images)?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(AdminError::InvalidDraftField { field: "name" });
        }
        let part_number = self.part_number.trim();
        if part_number.is_empty() {
            return Err(AdminError::InvalidDraftField {
                field: "part number",
            });
        }
        let price = self
            .price
            .trim()
            .parse::<u64>()
            .map_err(|_| AdminError::InvalidDraftField { field: "price" })?;
        let stock = self
            .stock
            .trim()
            .parse::<u32>()
            .map_err(|_| AdminError::InvalidDraftField { field: "stock" })?;

        Ok(NewProduct {
            name: name.to_string(),
            part_number: part_number.to_string(),
            category: PartCategory::from_label(&self.category),
            model: self.model.trim().to_string(),
            price,
            stock,
            status: StockStatus::for_stock(stock, low_stock_threshold),
            images,
            supplier: self.supplier.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            name: "Front Brake Pad Set".into(),
            part_number: "BP-2201".into(),
            category: "Brakes".into(),
            model: "Corolla 2018".into(),
            price: "45".into(),
            stock: "3".into(),
            supplier: "Bosch".into(),
            description: String::new(),
            images: vec!["  https://img/pads.jpg ".into(), "".into()],
        }
    }

    #[test]
    fn status_derivation() {
        assert_eq!(StockStatus::for_stock(0, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_stock(9, 10), StockStatus::LowStock);
        assert_eq!(StockStatus::for_stock(10, 10), StockStatus::InStock);
    }

    #[test]
    fn unknown_status_label_is_kept() {
        let status = StockStatus::from_label("Discontinued");
        assert_eq!(status, StockStatus::Other("Discontinued".into()));
        assert_eq!(status.label(), "Discontinued");
    }

    #[test]
    fn category_labels_parse_case_insensitively() {
        assert_eq!(PartCategory::from_label("brakes"), PartCategory::Brakes);
        assert_eq!(
            PartCategory::from_label("Exhaust"),
            PartCategory::Other("Exhaust".into())
        );
    }

    #[test]
    fn draft_requires_an_image() {
        let mut draft = filled_draft();
        draft.images = vec!["   ".into()];
        assert_eq!(draft.validate(10), Err(AdminError::MissingProductImage));
    }

    #[test]
    fn image_count_bounds() {
        assert_eq!(check_images(&[]), Err(AdminError::MissingProductImage));
        assert_eq!(check_images(&["https://img/a.jpg".to_string()]), Ok(()));
        let many = vec!["https://img/a.jpg".to_string(); MAX_PRODUCT_IMAGES + 1];
        assert_eq!(
            check_images(&many),
            Err(AdminError::TooManyImages {
                max: MAX_PRODUCT_IMAGES
            })
        );
    }

    #[test]
    fn draft_drops_blank_image_slots_and_trims() {
        let product = filled_draft().validate(10).unwrap();
        assert_eq!(product.images, vec!["https://img/pads.jpg".to_string()]);
        assert_eq!(product.status, StockStatus::LowStock);
        assert_eq!(product.category, PartCategory::Brakes);
    }

    #[test]
    fn draft_rejects_non_numeric_price() {
        let mut draft = filled_draft();
        draft.price = "forty".into();
        assert_eq!(
            draft.validate(10),
            Err(AdminError::InvalidDraftField { field: "price" })
        );
    }

    #[test]
    fn image_slots_are_capped() {
        let mut draft = ProductDraft::default();
        for _ in 0..20 {
            draft.add_image_slot();
        }
        assert_eq!(draft.images.len(), MAX_PRODUCT_IMAGES);
        assert!(!draft.can_add_image());
    }

    #[test]
    fn removing_last_slot_leaves_an_empty_one() {
        let mut draft = ProductDraft::default();
        draft.set_image(0, "https://img/a.jpg".into());
        draft.remove_image_slot(0);
        assert_eq!(draft.images, vec![String::new()]);
    }

    #[test]
    fn patch_rederives_status_from_stock() {
        let mut product = filled_draft()
            .validate(10)
            .unwrap()
            .into_product(ProductId("P-0001".into()));
        ProductPatch {
            stock: Some(0),
            ..Default::default()
        }
        .apply_to(&mut product, 10);
        assert_eq!(product.status, StockStatus::OutOfStock);

        ProductPatch {
            stock: Some(50),
            status: Some(StockStatus::Other("Backorder".into())),
            ..Default::default()
        }
        .apply_to(&mut product, 10);
        assert_eq!(product.stock, 50);
        assert_eq!(product.status, StockStatus::Other("Backorder".into()));
    }
}
