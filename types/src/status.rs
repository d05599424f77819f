//! The verdict of an identify pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// Single classification of a verification pass, used to drive trust decisions.
///
/// `Update*` values apply when a prior tracking snapshot exists (or when a
/// snapshot component was broken or deleted), `New*` values when the identity
/// is being verified for the first time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackStatus {
    /// Nothing tracked yet, every proof checked out.
    NewOk,
    /// Nothing tracked yet, and no proof succeeded.
    NewZeroProofs,
    /// Nothing tracked yet, at least one proof failed.
    NewFailProofs,
    /// A tracked component broke or disappeared.
    UpdateBroken,
    /// Tracked, with proofs that were not in the snapshot.
    UpdateNewProofs,
    /// Tracked, and everything matches the snapshot.
    UpdateOk,
}

impl TrackStatus {
    pub const ALL: [TrackStatus; 6] = [
        Self::NewOk,
        Self::NewZeroProofs,
        Self::NewFailProofs,
        Self::UpdateBroken,
        Self::UpdateNewProofs,
        Self::UpdateOk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewOk => "NEW_OK",
            Self::NewZeroProofs => "NEW_ZERO_PROOFS",
            Self::NewFailProofs => "NEW_FAIL_PROOFS",
            Self::UpdateBroken => "UPDATE_BROKEN",
            Self::UpdateNewProofs => "UPDATE_NEW_PROOFS",
            Self::UpdateOk => "UPDATE_OK",
        }
    }

    /// Whether the verdict was reached against an existing snapshot.
    pub fn is_update(&self) -> bool {
        matches!(
            self,
            Self::UpdateBroken | Self::UpdateNewProofs | Self::UpdateOk
        )
    }

    /// Whether the verdict needs no user attention.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::NewOk | Self::UpdateOk)
    }
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| TypesError::UnknownTrackStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for status in TrackStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn update_statuses() {
        assert!(TrackStatus::UpdateBroken.is_update());
        assert!(TrackStatus::UpdateOk.is_update());
        assert!(!TrackStatus::NewFailProofs.is_update());
    }

    #[test]
    fn only_clean_verdicts_are_ok() {
        let ok: Vec<_> = TrackStatus::ALL.iter().filter(|s| s.is_ok()).collect();
        assert_eq!(ok, vec![&TrackStatus::NewOk, &TrackStatus::UpdateOk]);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("UPDATE_MAYBE".parse::<TrackStatus>().is_err());
        assert_eq!(
            "NEW_ZERO_PROOFS".parse::<TrackStatus>().unwrap(),
            TrackStatus::NewZeroProofs
        );
    }
}
