//! Authentication endpoints.
//!
//! These bypass [`ApiClient`](crate::shared::http::ApiClient): a 401 here
//! means bad credentials or an expired token, not a session to invalidate.

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

async fn post<B: Serialize>(path: &str, body: &B) -> Result<Response, String> {
    Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let response = post("/api/auth/login/", &LoginRequest { username, password }).await?;

    match response.status() {
        400 | 401 => Err("Invalid username or password".to_string()),
        _ if !response.ok() => Err(format!("Login failed: {}", response.status())),
        _ => parse(response).await,
    }
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh: String) -> Result<RefreshResponse, String> {
    let response = post("/api/auth/refresh/", &RefreshRequest { refresh }).await?;
    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }
    parse(response).await
}

/// Revoke the refresh token
pub async fn logout(refresh: String) -> Result<(), String> {
    let response = post("/api/auth/logout/", &RefreshRequest { refresh }).await?;
    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }
    Ok(())
}

/// Profile, roles and permissions of the token's owner
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me/"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }
    parse(response).await
}
