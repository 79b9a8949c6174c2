//! Error types for the place-details client.
//!
//! # Design
//! One variant per failure class. Transport and decode failures wrap the
//! underlying error transparently so callers see exactly what `ureq` or
//! `serde_json` reported. Non-2xx responses keep the raw status and body.
//! API-level failures display as the bare status token.

use thiserror::Error;

use crate::http::TransportError;
use crate::status::ApiStatus;

/// Errors returned by `DetailsCall::send` and `Service::parse_details`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained (DNS, refused connection, timeout), or its
    /// body could not be read.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status. Invalid UTF-8 in the body
    /// is replaced rather than rejected.
    #[error("bad resp {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// A 2xx body did not decode into the expected response shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The body decoded but its `status` field reports a failure.
    #[error("{0}")]
    Api(ApiStatus),
}

impl ApiError {
    /// The status token, for API-level failures only.
    pub fn api_status(&self) -> Option<&ApiStatus> {
        match self {
            ApiError::Api(status) => Some(status),
            _ => None,
        }
    }
}

/// Errors raised while assembling a `ServiceConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: set {0}")]
    MissingApiKey(&'static str),

    #[error("invalid timeout {value:?}: expected a whole number of seconds")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
