//! Identify outcome aggregation.
//!
//! An identify pass checks every remote proof an identity has published and
//! compares what it saw against the tracking snapshot recorded the last time
//! the identity was verified. The pipeline that performs those checks feeds
//! its results into an [`IdentifyOutcome`], which then answers three questions:
//!
//! 1. **Counts**: how many proofs failed, how many tracked components broke or
//!    changed, how many disappeared.
//! 2. **Verdict**: a single [`TrackStatus`](vouch_types::TrackStatus), derived
//!    by an ordered, total decision list.
//! 3. **Diagnostics**: a warning list plus an optional combined error, with a
//!    strict/lax switch deciding which problems are fatal.
//!
//! Performing the checks, diffing a proof against its tracked counterpart and
//! signing tracking statements are the job of other components; this crate
//! only consumes their results.

pub mod check;
pub mod config;
pub mod diff;
pub mod error;
pub mod links;
pub mod order;
pub mod outcome;
pub mod report;
pub mod status;
pub mod track;

pub use check::{LinkCheckResult, RemoteProofLink};
pub use config::IdentifyConfig;
pub use diff::{TrackDiff, TrackDiffDeleted};
pub use error::{ConfigError, IdentifyError, ProofError};
pub use links::{Proof, ProofSet, ProofState, RemoteProofLinks};
pub use order::RemoteServiceOrder;
pub use outcome::IdentifyOutcome;
pub use report::IdentifyReport;
pub use status::{classify, TrackCounts};
pub use track::{TrackIdComponent, TrackLookup, TrackSet};
