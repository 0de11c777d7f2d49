//! Persisted login session (localStorage).

use serde::{Deserialize, Serialize};
use web_sys::window;

const SESSION_KEY: &str = "gasdesk_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Malformed or empty entries count as no session.
fn decode_session(raw: &str) -> Option<StoredSession> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .filter(|session| !session.access.is_empty())
}

pub fn load_session() -> Option<StoredSession> {
    let storage = get_local_storage()?;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    let session = decode_session(&raw);
    if session.is_none() {
        log::warn!("discarding malformed stored session");
        let _ = storage.remove_item(SESSION_KEY);
    }
    session
}

pub fn save_session(session: &StoredSession) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
        Err(e) => log::warn!("failed to persist session: {}", e),
    }
}

/// Replace the access token, keeping the refresh token.
pub fn update_access_token(access: &str) {
    let refresh = load_session().and_then(|s| s.refresh);
    save_session(&StoredSession {
        access: access.to_string(),
        refresh,
    });
}

pub fn get_access_token() -> Option<String> {
    load_session().map(|s| s.access)
}

pub fn get_refresh_token() -> Option<String> {
    load_session().and_then(|s| s.refresh)
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_session() {
        assert_eq!(
            decode_session(r#"{"access": "a1", "refresh": "r1"}"#),
            Some(StoredSession {
                access: "a1".to_string(),
                refresh: Some("r1".to_string()),
            })
        );
        assert_eq!(
            decode_session(r#"{"access": "a1"}"#).and_then(|s| s.refresh),
            None
        );
    }

    #[test]
    fn test_malformed_session_is_ignored() {
        assert_eq!(decode_session("not json"), None);
        assert_eq!(decode_session(r#"{"access": ""}"#), None);
        assert_eq!(decode_session(r#"{"refresh": "r1"}"#), None);
    }
}
