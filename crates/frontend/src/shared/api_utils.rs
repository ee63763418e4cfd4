//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port of the product API, overridable at build time with `PRODUCT_API_PORT`
pub const DEFAULT_API_PORT: &str = "3000";

fn api_port() -> &'static str {
    option_env!("PRODUCT_API_PORT").unwrap_or(DEFAULT_API_PORT)
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location
/// and the configured API port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format_base(&protocol, &hostname, api_port())
}

fn format_base(protocol: &str, hostname: &str, port: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/products");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
