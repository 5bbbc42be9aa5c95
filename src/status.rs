//! HTTP status codes.

/// The canonical reason phrase for a status code, if one is defined for it.
pub fn canonical_reason(code: u16) -> Option<&'static str> {
    match code {
        100 => Some("Continue"),
        200 => Some("OK"),
        204 => Some("No Content"),
        301 => Some("Moved Permanently"),
        302 => Some("Found"),
        304 => Some("Not Modified"),
        400 => Some("Bad Request"),
        403 => Some("Forbidden"),
        404 => Some("Not Found"),
        405 => Some("Method Not Allowed"),
        408 => Some("Request Timeout"),
        414 => Some("URI Too Long"),
        431 => Some("Request Header Fields Too Large"),
        500 => Some("Internal Server Error"),
        501 => Some("Not Implemented"),
        503 => Some("Service Unavailable"),
        505 => Some("HTTP Version Not Supported"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::canonical_reason;

    #[test]
    fn test_reasons() {
        assert_eq!(canonical_reason(200), Some("OK"));
        assert_eq!(canonical_reason(404), Some("Not Found"));
        assert_eq!(canonical_reason(299), None);
    }
}
