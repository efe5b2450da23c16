//! API utilities for frontend-backend communication
//!
//! Helpers for resolving the backend base URL and composing endpoint URLs.

/// Path prefix every backend endpoint lives under
pub const API_PREFIX: &str = "/v1";

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `API_BASE_URL` set at build time (e.g. `API_BASE_URL=https://api.example.com trunk build`)
/// 2. Origin of the current window (same-origin deployment or dev proxy)
/// 3. Empty string, so requests stay relative
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        if !base.trim().is_empty() {
            return base.trim_end_matches('/').to_string();
        }
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join a base URL and an absolute path without doubling or dropping the slash
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Whether `endpoint` is addressed under [`API_PREFIX`]
pub fn is_api_path(endpoint: &str) -> bool {
    endpoint == API_PREFIX
        || endpoint
            .strip_prefix(API_PREFIX)
            .map(|rest| rest.starts_with('/') || rest.starts_with('?'))
            .unwrap_or(false)
}
