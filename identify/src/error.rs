use thiserror::Error;

/// Why a single remote proof check failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProofError {
    #[error("proof not found at {0}")]
    NotFound(String),

    #[error("proof content mismatch: expected {expected}, found {found}")]
    ContentMismatch { expected: String, found: String },

    #[error("proof was revoked")]
    Revoked,

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Other(String),
}

impl ProofError {
    /// Whether retrying the check later could plausibly succeed.
    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_))
    }
}

/// Errors surfaced by an identify pass.
///
/// Everything except [`IdentifyError::Problems`] is a terminal error set by
/// the verification pipeline. `Problems` carries the combined diagnostics
/// message built from the outcome's counts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IdentifyError {
    #[error("no such user: {0}")]
    NoSuchUser(String),

    #[error("not logged in")]
    NotLoggedIn,

    #[error("key {0} has been revoked")]
    KeyRevoked(String),

    #[error("{0}")]
    Problems(String),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
