//! Fundamental types for Vouch identity verification.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! remote proof categories, verdict values, warnings, and timestamps.

pub mod error;
pub mod proof_type;
pub mod status;
pub mod time;
pub mod warning;

pub use error::TypesError;
pub use proof_type::ProofType;
pub use status::TrackStatus;
pub use time::Timestamp;
pub use warning::{Warning, Warnings};
