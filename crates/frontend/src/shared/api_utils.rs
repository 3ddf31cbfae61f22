//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// `API_BASE_URL` set at build time wins. Otherwise the URL is derived from
/// the current window location, using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
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
    format!("{}//{}:8000/api", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/pedidos/");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Collection path with the trailing slash the REST backend expects
pub fn collection_path(collection: &str) -> String {
    format!("/{}/", collection.trim_matches('/'))
}

/// Element path: `/{collection}/{id}/`
pub fn element_path(collection: &str, id: i64) -> String {
    format!("/{}/{}/", collection.trim_matches('/'), id)
}
