//! Client build configuration.
//!
//! The backend base URL is baked in at compile time from
//! `INSURANCE_API_URL`, since a WASM bundle has no process environment to
//! read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Backend base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("INSURANCE_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
