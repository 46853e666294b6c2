//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location and the
/// configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format_base(&protocol, &hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(config.api.port, "/api/safe/data-sources");
/// ```
pub fn api_url(port: u16, path: &str) -> String {
    format!("{}{}", api_base(port), path)
}

fn format_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_base() {
        assert_eq!(format_base("http:", "localhost", 3000), "http://localhost:3000");
        assert_eq!(format_base("https:", "safe.example", 8443), "https://safe.example:8443");
    }
}
