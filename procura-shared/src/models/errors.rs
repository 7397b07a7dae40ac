use serde::{Deserialize, Serialize};

/// Error body returned by the backend for any non-2xx response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    #[must_use]
    pub const fn has_details(&self) -> bool {
        self.details.is_some()
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Vendor not found");
        assert_eq!(error.message, "Vendor not found");
        assert!(!error.has_details());
    }

    #[test]
    fn test_error_response_display() {
        assert_eq!(ErrorResponse::new("Simple error").to_string(), "Simple error");
        assert_eq!(
            ErrorResponse::with_details("Order locked", "already approved").to_string(),
            "Order locked: already approved"
        );
    }

    /// The backend omits `details` entirely when it has none.
    #[test]
    fn test_error_response_missing_details() {
        let error: ErrorResponse = serde_json::from_str(r#"{"message":"Forbidden"}"#).unwrap();
        assert_eq!(error, ErrorResponse::new("Forbidden"));
    }
}
