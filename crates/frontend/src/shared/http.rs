//! Authenticated JSON requests against the REST backend.
//!
//! Every request goes through [`ApiClient`], so a `401 Unauthorized` is
//! handled in one place: the session is invalidated through the callback
//! installed by the auth provider, and route gates redirect to login.

use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Session expired, please log in again")]
    Unauthorized,
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

/// Django REST error body: `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Map a response status to the error the caller sees. `body` is only
/// read for failures.
fn classify(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::Status {
            status,
            message: status_message(status, body),
        }),
    }
}

fn status_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        format!("HTTP {}", status)
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[derive(Clone, Copy)]
pub struct ApiClient {
    on_unauthorized: Callback<()>,
}

impl ApiClient {
    pub fn new(on_unauthorized: Callback<()>) -> Self {
        Self { on_unauthorized }
    }

    /// GET `path` (relative to the API base) and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut request = Request::get(&api_url(path)).header("Accept", "application/json");
        if let Some(token) = storage::get_access_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            let outcome = classify(status, &body);
            if outcome == Err(ApiError::Unauthorized) {
                log::warn!("{} answered 401, invalidating session", response.url());
                self.on_unauthorized.run(());
            }
            outcome?;
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Client installed by `AuthProvider`.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("AuthProvider not found in component tree")
}
