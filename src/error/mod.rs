//! Error types for the roster crate.
//!
//! A single unified [`Error`] enum covers the domain signal for missing
//! players, transport and HTTP failures, payload parsing issues, and
//! configuration problems. External library errors convert automatically via
//! `thiserror`'s `#[from]` so callers can use the `?` operator throughout.

pub mod config;
pub mod retry;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the roster crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested player id does not exist upstream (HTTP 404).
    ///
    /// This is an expected signal, not a failure: the player service reacts
    /// by drawing a fresh random id. It is never surfaced to callers of
    /// `create_player`.
    #[error("no player found for id {0}")]
    PlayerNotFound(u32),
    /// Upstream answered with a non-success status other than 404.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus {
        /// Status code of the response.
        status: reqwest::StatusCode,
        /// URL the request was issued against.
        url: String,
    },
    /// Failed to parse a value from an API payload.
    #[error("failed to parse value: {0:?}")]
    ParseError(String),
    /// Gave up drawing random ids after repeated upstream 404s.
    #[error("no valid player id found after {0} attempts")]
    PlayerLookupExhausted(u32),
    /// Configuration error (invalid environment override).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Transport-level failure (connection, TLS, timeout, body read).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}
