use dioxus::prelude::*;

use storefront_common::product::Product;

use super::product_card::ProductCard;

/// Products to lay out, in input order. An absent list lays out nothing.
pub fn grid_products(products: Option<&Vec<Product>>) -> &[Product] {
    products.map(Vec::as_slice).unwrap_or_default()
}

/// A titled section with one card per product.
#[component]
pub fn ProductGrid(title: String, #[props(!optional)] products: Option<Vec<Product>>) -> Element {
    rsx! {
        section { class: "product-section",
            h2 { class: "section-title", "{title}" }
            div { class: "product-grid",
                {grid_products(products.as_ref()).iter().map(|product| {
                    rsx! {
                        ProductCard { key: "{product.id}", product: product.clone() }
                    }
                })}
            }
        }
    }
}
