//! Error types for matching-network synthesis.

use mn_core::error::McError;
use thiserror::Error;

/// Errors that can occur while synthesizing a matching network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid input: {what} = {value}")]
    InvalidInput { what: &'static str, value: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

pub type MatchResult<T> = Result<T, MatchError>;

impl From<McError> for MatchError {
    fn from(e: McError) -> Self {
        match e {
            McError::NonFinite { what, value } => MatchError::InvalidInput { what, value },
            McError::NonPositive { what, value } => MatchError::InvalidInput { what, value },
            McError::InvalidArg { what } => MatchError::InvalidInput {
                what,
                value: f64::NAN,
            },
            McError::Invariant { what } => MatchError::Invariant { what },
        }
    }
}

impl From<MatchError> for McError {
    fn from(e: MatchError) -> Self {
        match e {
            MatchError::InvalidInput { what, .. } => McError::InvalidArg { what },
            MatchError::Invariant { what } => McError::Invariant { what },
        }
    }
}
