//! Error Types

use thiserror::Error;

/// Failure of a request against the backend or the IBGE service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Failure of the one-shot device position query
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not available in this browser")]
    Unavailable,

    #[error("geolocation failed (code {code}): {message}")]
    Failed { code: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 400, status_text: "Bad Request".to_string() };
        assert_eq!(err.to_string(), "HTTP 400: Bad Request");
    }

    #[test]
    fn test_geolocation_error_message() {
        let err = GeolocationError::Failed { code: 1, message: "User denied Geolocation".to_string() };
        assert_eq!(err.to_string(), "geolocation failed (code 1): User denied Geolocation");
    }
}
