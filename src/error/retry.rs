use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Error::ReqwestError(reqwest_error) => {
                // A body that arrived but failed to decode is malformed
                // data, not a transient fault
                if reqwest_error.is_decode() {
                    ErrorRetryStrategy::Fail
                } else if let Some(status) = reqwest_error.status() {
                    if status.is_server_error() {
                        ErrorRetryStrategy::Retry
                    } else {
                        ErrorRetryStrategy::Fail
                    }
                } else {
                    // Network error or connection issue - should retry
                    ErrorRetryStrategy::Retry
                }
            }

            Error::HttpStatus { status, .. } => {
                if status.is_server_error() {
                    // Upstream is temporarily unavailable, backoff and retry
                    ErrorRetryStrategy::Retry
                } else {
                    // We're making invalid requests, retrying won't help
                    ErrorRetryStrategy::Fail
                }
            }

            // Missing players are a domain signal handled by the player
            // service's resampling loop, not the HTTP retry policy
            Error::PlayerNotFound(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Error::ParseError(_) => ErrorRetryStrategy::Fail,

            // Exhausted lookups - permanent failure for this operation
            Error::PlayerLookupExhausted(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Error::ConfigError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
