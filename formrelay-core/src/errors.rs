//! Error types for submission relay functionality.

use thiserror::Error;

/// Errors that can occur while relaying a form submission.
///
/// The user-facing surface collapses all of these into a single failure
/// notification; the variants exist for tracing and for callers embedding
/// the relay directly.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The HTTP request could not be completed.
    #[error("request failed: {reason}")]
    RequestFailed {
        /// The reason the request failed
        reason: String,
    },

    /// The response body could not be parsed as JSON.
    #[error("invalid response body: {reason}")]
    InvalidResponse {
        /// The reason the response body was rejected
        reason: String,
    },

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint {
        /// The endpoint string that failed to parse
        url: String,
        /// The reason the endpoint was rejected
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_descriptions_carry_reason() {
        let error = SubmitError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "request failed: connection refused");

        let error = SubmitError::InvalidResponse {
            reason: "expected value at line 1".to_string(),
        };
        assert!(error.to_string().starts_with("invalid response body: "));
    }

    #[test]
    fn test_invalid_endpoint_names_url() {
        let error = SubmitError::InvalidEndpoint {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
    }
}
