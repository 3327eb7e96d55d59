//! HTTP client for the storefront API.
//!
//! Base URL comes from `STOREFRONT_API_URL` at compile time, falling back to
//! a local dev server. WASM builds also accept a runtime `?api=<url>` query
//! parameter override.

use storefront_common::api::{
    classify_orders_response, decode_catalog, ApiError, CatalogSource, OrderFetch, OrderSource,
};
use storefront_common::product::CatalogSection;
use storefront_common::session::Session;

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

fn compile_time_api_url() -> &'static str {
    option_env!("STOREFRONT_API_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

/// Resolve the API base URL: query override first, then compile-time config.
fn api_base_url() -> String {
    match runtime_api_override() {
        Some(url) => url,
        None => compile_time_api_url().to_string(),
    }
}

#[cfg(target_family = "wasm")]
fn runtime_api_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|qs| web_sys::UrlSearchParams::new_with_str(&qs).ok()?.get("api"))
        .filter(|url| !url.is_empty())
}

#[cfg(not(target_family = "wasm"))]
fn runtime_api_override() -> Option<String> {
    None
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Storefront API client. Only functional in WASM builds.
#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontClient {
    base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create a client from the configured API base URL.
    pub fn from_config() -> Self {
        Self::new(api_base_url())
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

impl OrderSource for StorefrontClient {
    async fn fetch_orders(&self, session: &Session) -> OrderFetch {
        let url = self.url("/orders");
        match get_text(&url, Some(&session.bearer())).await {
            Ok((status, body)) => classify_orders_response(status, &body),
            Err(e) => OrderFetch::Failed(e),
        }
    }
}

impl CatalogSource for StorefrontClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogSection>, ApiError> {
        let url = self.url("/catalog");
        let (status, body) = get_text(&url, None).await?;
        if status >= 400 {
            return Err(ApiError::Http { status, body });
        }
        decode_catalog(&body)
    }
}

// ─── HTTP helpers (WASM) ─────────────────────────────────────────────────────

/// GET `url`, returning the status code and body text.
#[cfg(target_family = "wasm")]
async fn get_text(url: &str, authorization: Option<&str>) -> Result<(u16, String), ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Transport(format!("Failed to create request: {:?}", e)))?;

    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Transport(format!("Failed to set header: {:?}", e)))?;
    if let Some(value) = authorization {
        request
            .headers()
            .set("Authorization", value)
            .map_err(|e| ApiError::Transport(format!("Failed to set header: {:?}", e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("No window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(format!("Fetch failed: {:?}", e)))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("Response is not a Response object".into()))?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Transport(format!("Failed to get text: {:?}", e)))?,
    )
    .await
    .map_err(|e| ApiError::Transport(format!("Failed to read body: {:?}", e)))?;

    let body = text
        .as_string()
        .ok_or_else(|| ApiError::Decode("Response body is not a string".into()))?;

    tracing::debug!("GET {} -> {}", url, resp.status());
    Ok((resp.status(), body))
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn get_text(url: &str, _authorization: Option<&str>) -> Result<(u16, String), ApiError> {
    Err(ApiError::Unavailable(format!(
        "no HTTP transport outside WASM ({url})"
    )))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_join_url_slashes() {
        assert_eq!(join_url("http://shop/api", "/orders"), "http://shop/api/orders");
        assert_eq!(join_url("http://shop/api/", "orders"), "http://shop/api/orders");
        assert_eq!(join_url("http://shop/api//", "//catalog"), "http://shop/api/catalog");
    }

    #[test]
    fn test_from_config_uses_compile_time_url() {
        let client = StorefrontClient::from_config();
        assert_eq!(client.base_url, compile_time_api_url());
        assert!(!client.base_url.is_empty());
    }

    #[cfg(not(target_family = "wasm"))]
    #[test]
    fn test_native_build_reports_unavailable() {
        let client = StorefrontClient::new("http://shop/api");
        let fetch = block_on(client.fetch_orders(&Session::new("tok")));
        assert!(matches!(fetch, OrderFetch::Failed(ApiError::Unavailable(_))));

        let catalog = block_on(client.fetch_catalog());
        assert!(matches!(catalog, Err(ApiError::Unavailable(_))));
    }
}
