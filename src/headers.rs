use axum::http::{HeaderMap, HeaderName};

/// Returns htmx headers.
pub fn htmx_headers() -> Vec<HeaderName> {
    vec![
        HeaderName::from_static("hx-current-url"),
        HeaderName::from_static("hx-request"),
        HeaderName::from_static("hx-target"),
        HeaderName::from_static("hx-trigger"),
    ]
}

/// True when the request was issued by htmx and expects a fragment.
pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod test {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_header_length() {
        assert_eq!(4, htmx_headers().len());
    }

    #[test]
    fn test_allows_the_header_it_detects() {
        assert!(htmx_headers().iter().any(|h| h == "hx-request"));
    }

    #[test]
    fn test_htmx_request_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx_request(&headers));

        headers.insert("hx-request", HeaderValue::from_static("true"));
        assert!(is_htmx_request(&headers));

        headers.insert("hx-request", HeaderValue::from_static("false"));
        assert!(!is_htmx_request(&headers));

        headers.insert("hx-request", HeaderValue::from_static("TRUE"));
        assert!(is_htmx_request(&headers));
    }
}
