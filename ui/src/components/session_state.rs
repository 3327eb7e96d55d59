use dioxus::prelude::*;

use storefront_common::session::Session;

/// `localStorage` key holding the JSON-encoded session.
#[allow(dead_code)] // used in WASM builds
const SESSION_STORAGE_KEY: &str = "storefront_session";

/// The signed-in shopper, if any.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Restore the session persisted by the sign-in flow.
    pub fn load() -> Self {
        let session = load_stored_session();
        if session.is_none() {
            tracing::debug!("No stored session");
        }
        Self { session }
    }
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

#[cfg(target_family = "wasm")]
fn load_stored_session() -> Option<Session> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    parse_stored_session(&raw)
}

#[cfg(not(target_family = "wasm"))]
fn load_stored_session() -> Option<Session> {
    None
}

#[allow(dead_code)] // used in WASM builds
fn parse_stored_session(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Ignoring malformed stored session: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_session() {
        let session = parse_stored_session(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.expires_at, None);

        assert_eq!(parse_stored_session("not json"), None);
        assert_eq!(parse_stored_session(r#"{"expiresAt": null}"#), None);
    }
}
