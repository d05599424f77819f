//! Top-level error type shared across crates.

use thiserror::Error;

/// Errors raised while parsing or validating the shared types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("unknown proof type: {0}")]
    UnknownProofType(String),

    #[error("unknown track status: {0}")]
    UnknownTrackStatus(String),
}
