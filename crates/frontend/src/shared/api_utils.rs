//! API utilities for frontend-backend communication
//!
//! Backend отдаёт и оболочку приложения, и API, поэтому запросы идут на тот
//! же origin, что и страница.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/product?currentPage=1&pageSize=10");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
