use serde::{Deserialize, Serialize};

/// A product listing in the storefront catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A titled group of products shown as one grid on the storefront page.
///
/// `products` stays `None` when the catalogue omits it or sends `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub title: String,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}
