use dioxus::prelude::*;

use super::catalog_state::{use_catalog_loader, use_catalog_state, CatalogState};
use super::my_orders::MyOrders;
use super::product_grid::ProductGrid;
use super::session_state::{use_session, SessionState};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Storefront {},
    #[route("/orders")]
    Orders {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(SessionState::load()));
    use_context_provider(|| Signal::new(CatalogState::new()));
    use_catalog_loader();

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let signed_in = session.read().session.is_some();

    rsx! {
        div { class: "storefront-app",
            header { class: "app-header",
                h1 { "Storefront" }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Storefront {}); },
                        "Shop"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Orders {}); },
                        "My Orders"
                    }
                    if !signed_in {
                        span { class: "signed-out", "Not signed in" }
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: one product grid per catalogue section.
#[component]
fn Storefront() -> Element {
    let catalog = use_catalog_state();
    let state = catalog.read();

    if !state.loaded {
        return rsx! {
            div { class: "spinner-wrap",
                div { class: "spinner", role: "progressbar" }
            }
        };
    }

    rsx! {
        div { class: "storefront",
            if let Some(err) = state.last_error.as_ref() {
                p { class: "catalog-error", "Could not load products: {err}" }
            }
            {state.sections.iter().enumerate().map(|(i, section)| {
                rsx! {
                    ProductGrid {
                        key: "{i}",
                        title: section.title.clone(),
                        products: section.products.clone(),
                    }
                }
            })}
        }
    }
}

/// Route component: renders the order history.
#[component]
fn Orders() -> Element {
    rsx! { MyOrders {} }
}

#[cfg(test)]
mod tests {
    use storefront_common::product::{CatalogSection, Product};

    use super::*;

    fn section(title: &str, product_id: u64, product_title: &str) -> CatalogSection {
        CatalogSection {
            title: title.into(),
            products: Some(vec![Product {
                id: product_id,
                title: product_title.into(),
                price: 5.0,
                image_url: None,
                description: None,
            }]),
        }
    }

    #[test]
    fn test_storefront_renders_sections_sharing_a_title() {
        fn app() -> Element {
            use_context_provider(|| {
                Signal::new(CatalogState {
                    sections: vec![section("Sale", 1, "Mug"), section("Sale", 2, "Tote")],
                    loaded: true,
                    last_error: None,
                })
            });
            rsx! { Storefront {} }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches(r#"<h2 class="section-title">Sale</h2>"#).count(), 2);
        assert!(html.find("Mug").unwrap() < html.find("Tote").unwrap());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Storefront {}.to_string(), "/");
        assert_eq!(Route::Orders {}.to_string(), "/orders");
        assert_eq!("/orders".parse::<Route>().ok(), Some(Route::Orders {}));
    }
}
