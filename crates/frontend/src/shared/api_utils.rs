//! API utilities for frontend-backend communication
//!
//! The backend base URL is taken from `BACKEND_URL` at compile time when set,
//! otherwise it is derived from the current window location on port 5000.

/// Port of the content backend when no explicit URL is configured
pub const BACKEND_PORT: u16 = 5000;

/// Compile-time override, e.g. `BACKEND_URL=https://cms.example.com trunk build`
const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Pick the API base from the configured URL or the page location.
///
/// A trailing slash on the configured URL is dropped so paths can always
/// start with `/api/`.
pub fn resolve_api_base(configured: Option<&str>, protocol: &str, hostname: &str) -> String {
    match configured.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{}//{}:{}", protocol, hostname, BACKEND_PORT),
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - `BACKEND_URL` when configured
/// - otherwise a URL like "http://localhost:5000"
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "localhost".to_string()),
            )
        }
        None => ("http:".to_string(), "localhost".to_string()),
    };
    resolve_api_base(BACKEND_URL, &protocol, &hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/destinations");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encode one path segment, e.g. a record id
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_url_wins() {
        assert_eq!(
            resolve_api_base(Some("https://cms.example.com/"), "http:", "localhost"),
            "https://cms.example.com"
        );
    }

    #[test]
    fn falls_back_to_page_host_on_backend_port() {
        assert_eq!(
            resolve_api_base(None, "https:", "admin.example.com"),
            "https://admin.example.com:5000"
        );
        assert_eq!(
            resolve_api_base(Some("  "), "http:", "127.0.0.1"),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn ids_are_encoded_as_one_segment() {
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(path_segment("7"), "7");
    }
}
