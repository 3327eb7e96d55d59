use dioxus::prelude::*;

use storefront_common::currency::format_price;
use storefront_common::product::Product;

#[component]
pub fn ProductCard(product: Product) -> Element {
    let price = format_price(product.price);

    rsx! {
        div { class: "product-card",
            if let Some(src) = product.image_url.as_ref() {
                img { class: "product-image", src: "{src}", alt: "{product.title}" }
            }
            h3 { class: "product-title", "{product.title}" }
            if let Some(desc) = product.description.as_ref() {
                p { class: "product-description", "{desc}" }
            }
            p { class: "price", "{price}" }
        }
    }
}
