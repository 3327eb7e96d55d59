//! Contract between the storefront views and the storefront API.
//!
//! Order retrieval reports a tagged [`OrderFetch`] so callers can tell an
//! empty history apart from a missing session or a failed request. The order
//! history page still renders all non-data outcomes as its empty state; the
//! distinction is kept for logging.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::order::OrderCollection;
use crate::product::CatalogSection;
use crate::session::Session;

/// Errors from storefront API calls.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The server answered with an error status.
    Http { status: u16, body: String },
    /// The request never produced a response.
    Transport(String),
    /// The response body did not match the expected shape.
    Decode(String),
    /// No HTTP transport in this build.
    Unavailable(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            Self::Transport(msg) => write!(f, "request failed: {msg}"),
            Self::Decode(msg) => write!(f, "unexpected response: {msg}"),
            Self::Unavailable(msg) => write!(f, "api unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Outcome of a single order-history retrieval.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderFetch {
    Loaded(OrderCollection),
    /// The service returned nothing.
    Empty,
    /// No usable session, or the service rejected it.
    AuthRequired,
    Failed(ApiError),
}

impl OrderFetch {
    /// Collapse to what the history page displays: data, or the empty collection.
    pub fn into_collection(self) -> OrderCollection {
        match self {
            OrderFetch::Loaded(collection) => collection,
            OrderFetch::Empty | OrderFetch::AuthRequired | OrderFetch::Failed(_) => {
                OrderCollection::default()
            }
        }
    }

    /// Short name of the outcome for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderFetch::Loaded(_) => "loaded",
            OrderFetch::Empty => "empty",
            OrderFetch::AuthRequired => "auth-required",
            OrderFetch::Failed(_) => "failed",
        }
    }
}

/// Source of a shopper's order history.
#[allow(async_fn_in_trait)]
pub trait OrderSource {
    async fn fetch_orders(&self, session: &Session) -> OrderFetch;
}

/// Source of the storefront catalogue sections.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogSection>, ApiError>;
}

/// Retrieve the order history once.
///
/// A missing or expired session short-circuits to `AuthRequired` without
/// touching the source.
pub async fn fetch_order_history<S: OrderSource>(
    source: &S,
    session: Option<&Session>,
    now: DateTime<Utc>,
) -> OrderFetch {
    match session {
        Some(session) if !session.is_expired(now) => source.fetch_orders(session).await,
        _ => OrderFetch::AuthRequired,
    }
}

/// Map a raw `/orders` response to an [`OrderFetch`].
pub fn classify_orders_response(status: u16, body: &str) -> OrderFetch {
    match status {
        401 | 403 => return OrderFetch::AuthRequired,
        s if s >= 400 => {
            return OrderFetch::Failed(ApiError::Http {
                status: s,
                body: body.to_string(),
            })
        }
        _ => {}
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return OrderFetch::Empty;
    }

    match serde_json::from_str::<OrderCollection>(trimmed) {
        Ok(collection) => OrderFetch::Loaded(collection),
        Err(e) => OrderFetch::Failed(ApiError::Decode(format!("orders: {e}"))),
    }
}

/// Decode a `/catalog` response body.
pub fn decode_catalog(body: &str) -> Result<Vec<CatalogSection>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(format!("catalog: {e}")))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::TimeZone;
    use futures::executor::block_on;

    use super::*;
    use crate::order::Order;

    struct CountingSource {
        calls: Cell<u32>,
        outcome: OrderFetch,
    }

    impl CountingSource {
        fn new(outcome: OrderFetch) -> Self {
            Self {
                calls: Cell::new(0),
                outcome,
            }
        }
    }

    impl OrderSource for CountingSource {
        async fn fetch_orders(&self, _session: &Session) -> OrderFetch {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap()
    }

    fn one_order() -> OrderCollection {
        OrderCollection {
            items: vec![Order {
                id: 1,
                created_date: "2024-03-01T09:00:00Z".into(),
                status_identifier: "processing".into(),
                total_sum: "10.00".into(),
                products: Vec::new(),
            }],
            total: 1,
        }
    }

    #[test]
    fn test_live_session_calls_source_once() {
        let source = CountingSource::new(OrderFetch::Loaded(one_order()));
        let session = Session::new("tok");
        let fetch = block_on(fetch_order_history(&source, Some(&session), now()));
        assert_eq!(fetch, OrderFetch::Loaded(one_order()));
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_missing_or_expired_session_skips_source() {
        let source = CountingSource::new(OrderFetch::Empty);
        let fetch = block_on(fetch_order_history(&source, None, now()));
        assert_eq!(fetch, OrderFetch::AuthRequired);

        let mut expired = Session::new("tok");
        expired.expires_at = Some(now());
        let fetch = block_on(fetch_order_history(&source, Some(&expired), now()));
        assert_eq!(fetch, OrderFetch::AuthRequired);
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_non_data_outcomes_collapse_to_empty() {
        for fetch in [
            OrderFetch::Empty,
            OrderFetch::AuthRequired,
            OrderFetch::Failed(ApiError::Transport("offline".into())),
        ] {
            assert_eq!(fetch.into_collection(), OrderCollection::default());
        }
        assert_eq!(OrderFetch::Loaded(one_order()).into_collection(), one_order());
    }

    #[test]
    fn test_classify_auth_and_http_errors() {
        assert_eq!(classify_orders_response(401, ""), OrderFetch::AuthRequired);
        assert_eq!(classify_orders_response(403, "nope"), OrderFetch::AuthRequired);
        assert_eq!(
            classify_orders_response(502, "bad gateway"),
            OrderFetch::Failed(ApiError::Http {
                status: 502,
                body: "bad gateway".into()
            })
        );
    }

    #[test]
    fn test_classify_blank_and_null_as_empty() {
        assert_eq!(classify_orders_response(200, ""), OrderFetch::Empty);
        assert_eq!(classify_orders_response(204, "  \n"), OrderFetch::Empty);
        assert_eq!(classify_orders_response(200, "null"), OrderFetch::Empty);
    }

    #[test]
    fn test_classify_body() {
        let body = r#"{"items": [{"id": 1, "createdDate": "2024-03-01T09:00:00Z",
            "statusIdentifier": "processing", "totalSum": "10.00", "products": []}], "total": 1}"#;
        assert_eq!(
            classify_orders_response(200, body),
            OrderFetch::Loaded(one_order())
        );

        match classify_orders_response(200, "{\"items\": 7}") {
            OrderFetch::Failed(ApiError::Decode(msg)) => assert!(msg.starts_with("orders:")),
            other => panic!("expected decode failure, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_catalog() {
        let body = r#"[{"title": "Featured", "products": [{"id": 1, "title": "Mug", "price": 8.5}]},
                       {"title": "Coming Soon", "products": null}]"#;
        let sections = decode_catalog(body).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].products.as_ref().map(Vec::len), Some(1));
        assert_eq!(sections[1].products, None);

        assert!(matches!(decode_catalog("{}"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Http {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(
            ApiError::Unavailable("native build".into()).to_string(),
            "api unavailable: native build"
        );
    }
}
