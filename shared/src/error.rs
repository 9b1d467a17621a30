use std::fmt;
use thiserror::Error;

/// Failure of a call to the banking backend.
///
/// The message is shown to the user as-is, so it carries the transport's own
/// wording rather than a rephrasing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NetworkError {
    message: String,
}

impl NetworkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The request never produced a response
    pub fn transport(error: impl fmt::Display) -> Self {
        Self::new(error.to_string())
    }

    /// The backend answered with a non-success status
    pub fn status(code: u16) -> Self {
        Self::new(format!("Request failed with status code {}", code))
    }

    /// The response body did not have the expected shape
    pub fn decode(error: impl fmt::Display) -> Self {
        Self::new(format!("Failed to parse response: {}", error))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_verbatim() {
        let error = NetworkError::transport("Network Error");
        assert_eq!(error.to_string(), "Network Error");
        assert_eq!(error.message(), "Network Error");
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            NetworkError::status(500).to_string(),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn test_decode_message() {
        let error = NetworkError::decode("missing field `accounts`");
        assert_eq!(error.message(), "Failed to parse response: missing field `accounts`");
    }
}
