//! Track status classification.

use vouch_types::TrackStatus;

/// The aggregate counts a verdict is derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackCounts {
    pub track_failures: usize,
    pub deleted: usize,
    pub prior_tracked: bool,
    pub track_changes: usize,
    pub proof_successes: usize,
    pub proof_failures: usize,
}

/// Derive the verdict for a set of counts.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. any broken or deleted tracked component → [`TrackStatus::UpdateBroken`]
/// 2. prior snapshot present → [`TrackStatus::UpdateNewProofs`] if anything
///    changed, otherwise [`TrackStatus::UpdateOk`]
/// 3. no successful proof → [`TrackStatus::NewZeroProofs`]
/// 4. any failed proof → [`TrackStatus::NewFailProofs`]
/// 5. otherwise → [`TrackStatus::NewOk`]
pub fn classify(counts: &TrackCounts) -> TrackStatus {
    if counts.track_failures > 0 || counts.deleted > 0 {
        return TrackStatus::UpdateBroken;
    }
    if counts.prior_tracked {
        return if counts.track_changes > 0 {
            TrackStatus::UpdateNewProofs
        } else {
            TrackStatus::UpdateOk
        };
    }
    if counts.proof_successes == 0 {
        return TrackStatus::NewZeroProofs;
    }
    if counts.proof_failures > 0 {
        return TrackStatus::NewFailProofs;
    }
    TrackStatus::NewOk
}
