//! API-level status tokens carried in the `status` field of every response.
//!
//! # Design
//! Every token the place-details endpoint documents has its own variant, so
//! classification is a single exhaustive `match` in `is_error`. Tokens the
//! API may add later land in `Unrecognized` and are treated as errors; a call
//! only succeeds on a status we positively know means success.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiStatus {
    /// The request succeeded and `result` is populated.
    Ok,
    /// The place ID was valid but referenced no result.
    ZeroResults,
    /// The place ID was not found in the place database.
    NotFound,
    /// The request was malformed, usually a missing or invalid place ID.
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    /// Server-side error; the same request may succeed on a later attempt.
    UnknownError,
    Unrecognized(String),
}

impl ApiStatus {
    pub fn parse(token: &str) -> Self {
        match token {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "NOT_FOUND" => Self::NotFound,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Unrecognized(token) => token,
        }
    }

    /// Whether a response carrying this status must be reported as an error.
    pub fn is_error(&self) -> bool {
        match self {
            Self::Ok | Self::ZeroResults => false,
            Self::NotFound
            | Self::InvalidRequest
            | Self::OverQueryLimit
            | Self::RequestDenied
            | Self::UnknownError
            | Self::Unrecognized(_) => true,
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for ApiStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::parse(&token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [&str; 7] = [
        "OK",
        "ZERO_RESULTS",
        "NOT_FOUND",
        "INVALID_REQUEST",
        "OVER_QUERY_LIMIT",
        "REQUEST_DENIED",
        "UNKNOWN_ERROR",
    ];

    #[test]
    fn known_tokens_keep_their_text() {
        for token in KNOWN {
            let status = ApiStatus::parse(token);
            assert!(!matches!(status, ApiStatus::Unrecognized(_)), "{token}");
            assert_eq!(status.to_string(), token);
        }
    }

    #[test]
    fn only_ok_and_zero_results_are_not_errors() {
        let non_errors: Vec<&str> = KNOWN
            .iter()
            .copied()
            .filter(|t| !ApiStatus::parse(t).is_error())
            .collect();
        assert_eq!(non_errors, vec!["OK", "ZERO_RESULTS"]);
    }

    #[test]
    fn unknown_token_is_preserved_and_is_an_error() {
        let status: ApiStatus = "SOMETHING_NEW".parse().unwrap();
        assert_eq!(status, ApiStatus::Unrecognized("SOMETHING_NEW".to_string()));
        assert_eq!(status.as_str(), "SOMETHING_NEW");
        assert!(status.is_error());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(matches!(ApiStatus::parse("ok"), ApiStatus::Unrecognized(_)));
    }

    #[test]
    fn deserializes_from_json_string() {
        let status: ApiStatus = serde_json::from_str(r#""INVALID_REQUEST""#).unwrap();
        assert_eq!(status, ApiStatus::InvalidRequest);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""INVALID_REQUEST""#);
    }
}
