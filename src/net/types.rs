//! Auth DTOs for the client/backend boundary and the session user record.
//!
//! DESIGN
//! ======
//! [`User`] is the shape persisted under the `user` storage key, so its
//! serialized form must stay stable across releases: optional fields are
//! omitted rather than written as `null`. Backend responses are mapped into
//! it with [`User::from_token_response`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as held by the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend account identifier, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Contact phone number, if provided at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Opaque bearer token issued by `/auth/login` or `/auth/register`.
    pub token: String,
}

impl User {
    /// Build the session user from a successful login/register response.
    pub fn from_token_response(response: TokenResponse) -> Self {
        let TokenResponse { access_token, user, .. } = response;
        Self {
            id: Some(user.id),
            email: user.email,
            name: user.full_name,
            phone: user.phone,
            token: access_token,
        }
    }
}

impl From<TokenResponse> for User {
    fn from(response: TokenResponse) -> Self {
        Self::from_token_response(response)
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// Account record as returned by `/auth/me` and embedded in token responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: AccountResponse,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Error body returned by the backend on non-2xx responses.
///
/// `detail` is a plain message for handled errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ApiErrorBody {
    /// Human-readable message, if the body carries one.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .map(str::to_owned),
            _ => None,
        }
    }
}
