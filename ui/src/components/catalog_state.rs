use dioxus::prelude::*;

use storefront_common::api::{ApiError, CatalogSource};
use storefront_common::product::CatalogSection;

use super::storefront_client::StorefrontClient;

/// Catalogue sections shown on the storefront page.
///
/// Loaded once when the app starts; shared with every route through context.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub sections: Vec<CatalogSection>,
    /// Whether the initial load has finished (successfully or not).
    pub loaded: bool,
    /// Last error from the catalogue request.
    pub last_error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of the catalogue request.
    pub fn finish(&mut self, result: Result<Vec<CatalogSection>, ApiError>) {
        match result {
            Ok(sections) => {
                tracing::debug!("Catalogue loaded: {} sections", sections.len());
                self.sections = sections;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Catalogue request failed: {e}");
                self.last_error = Some(e.to_string());
            }
        }
        self.loaded = true;
    }
}

pub fn use_catalog_state() -> Signal<CatalogState> {
    use_context::<Signal<CatalogState>>()
}

/// Start the one-off catalogue request for the app.
pub fn use_catalog_loader() {
    let mut catalog = use_catalog_state();
    use_hook(|| {
        spawn(async move {
            let client = StorefrontClient::from_config();
            let result = client.fetch_catalog().await;
            catalog.write().finish(result);
        })
    });
}
