//! REST helpers for the backend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses surface the backend's `detail` message when it has one,
//! otherwise a fixed per-endpoint message the pages can show as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
use super::types::{AccountResponse, LoginRequest, RegisterRequest, TokenResponse};
#[cfg(any(test, feature = "hydrate"))]
use crate::config;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const CURRENT_USER_FAILED: &str = "Failed to get user info";

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", config::api_base_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn token_query_endpoint(path: &str, token: &str) -> String {
    endpoint(&format!("{path}?token={token}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: Option<&ApiErrorBody>, fallback: &str) -> ApiError {
    let detail = body
        .and_then(ApiErrorBody::message)
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Status { status, detail }
}

/// Exchange credentials for a token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend rejects the
/// credentials, or the response cannot be decoded.
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, ApiError> {
    post_json("/auth/login", request, LOGIN_FAILED).await
}

/// Create an account and receive a token via `POST /auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend rejects the
/// registration, or the response cannot be decoded.
pub async fn register(request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
    post_json("/auth/register", request, REGISTRATION_FAILED).await
}

/// Fetch the account behind `token` from `GET /auth/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the token is rejected, or
/// the response cannot be decoded.
pub async fn fetch_current_user(token: &str) -> Result<AccountResponse, ApiError> {
    get_with_token("/auth/me", token, CURRENT_USER_FAILED).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(&endpoint(path))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(resp, fallback).await
}

#[cfg(feature = "hydrate")]
async fn get_with_token<T: DeserializeOwned>(path: &str, token: &str, fallback: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&token_query_endpoint(path, token))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(resp, fallback).await
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(resp: gloo_net::http::Response, fallback: &str) -> Result<T, ApiError> {
    let status = resp.status();
    if !(200..300).contains(&status) {
        let body = match resp.json::<ApiErrorBody>().await {
            Ok(body) => Some(body),
            Err(e) => {
                log::debug!("unreadable error body for status {status}: {e}");
                None
            }
        };
        return Err(status_error(status, body.as_ref(), fallback));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn post_json<B, T>(_path: &str, _body: &B, _fallback: &str) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "hydrate"))]
async fn get_with_token<T: DeserializeOwned>(_path: &str, _token: &str, _fallback: &str) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}
