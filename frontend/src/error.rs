//! Client-side error taxonomy.
//!
//! Four failure classes reach a view controller: validation (caught before
//! any request leaves), unauthorized (token missing or rejected), http
//! (non-2xx with an optional server `detail`), and network (the request
//! never completed). Parse covers a 2xx body the client could not decode.
//! The UI only ever shows `message()`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Rejected client-side; no request was sent.
    Validation,
    /// 401: missing, invalid or expired token.
    Unauthorized,
    /// Any other non-success HTTP status.
    Http,
    /// Transport failure; no response at all.
    Network,
    /// Response body could not be decoded.
    Parse,
}

impl ApiErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorKind::Validation => "VALIDATION",
            ApiErrorKind::Unauthorized => "UNAUTHORIZED",
            ApiErrorKind::Http => "HTTP_ERROR",
            ApiErrorKind::Network => "NETWORK_ERROR",
            ApiErrorKind::Parse => "PARSE_ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiError {
    kind: ApiErrorKind,
    /// HTTP status, when a response was received.
    status: Option<u16>,
    message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message)
    }

    /// Builds the error for a non-success response: the server-provided
    /// `detail` message when present, otherwise the generic fallback.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail")?.as_str().map(str::to_string));
        let message = detail.unwrap_or_else(|| format!("HTTP error, status {}", status));
        let kind = if status == 401 {
            ApiErrorKind::Unauthorized
        } else {
            ApiErrorKind::Http
        };
        Self {
            kind,
            status: Some(status),
            message,
        }
    }

    // --- Accessors ---

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Human-readable text, the only thing the UI renders.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.error_code(), self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_message_is_extracted() {
        let e = ApiError::from_response(409, r#"{"detail":"Course is full."}"#);
        assert_eq!(e.message(), "Course is full.");
        assert_eq!(e.kind(), ApiErrorKind::Http);
        assert_eq!(e.status(), Some(409));
    }

    #[test]
    fn missing_detail_falls_back_to_generic() {
        let e = ApiError::from_response(500, "{}");
        assert_eq!(e.message(), "HTTP error, status 500");

        let e = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(e.message(), "HTTP error, status 502");
    }

    #[test]
    fn status_401_maps_to_unauthorized() {
        let e = ApiError::from_response(401, r#"{"detail":"Invalid or expired token."}"#);
        assert_eq!(e.kind(), ApiErrorKind::Unauthorized);
        assert_eq!(e.message(), "Invalid or expired token.");
    }

    #[test]
    fn display_carries_code_and_message() {
        let e = ApiError::validation("Grade must be between 0.0 and 4.0.");
        assert_eq!(e.to_string(), "[VALIDATION] Grade must be between 0.0 and 4.0.");
    }
}
