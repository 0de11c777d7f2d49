//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::config::app_config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set. Otherwise the URL
/// is derived from the current window location, on the configured
/// backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let config = &app_config().api;
    if !config.base_url.is_empty() {
        return config.base_url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/consumers/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
