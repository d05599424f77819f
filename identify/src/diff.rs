//! Comparisons between what an identify pass saw and what was tracked before.

use std::fmt;

use crate::track::TrackIdComponent;

/// How a current proof or key compares to its tracked counterpart.
///
/// The diffing algorithm lives with the verification pipeline; the outcome
/// only asks these two questions. Every diff that breaks tracking must also
/// report itself as different from what was tracked.
pub trait TrackDiff: fmt::Debug + Send + Sync {
    /// The difference invalidates the prior snapshot.
    fn breaks_tracking(&self) -> bool;

    /// Nothing changed relative to the prior snapshot.
    fn is_same_as_tracked(&self) -> bool;

    /// Short user-facing description of the difference.
    fn to_display_string(&self) -> String;
}

/// A tracked component that no longer appears in the identity's proofs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackDiffDeleted {
    component: TrackIdComponent,
}

impl TrackDiffDeleted {
    pub fn new(component: TrackIdComponent) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &TrackIdComponent {
        &self.component
    }

    pub fn to_display_string(&self) -> String {
        format!("Deleted proof: {}", self.component)
    }
}

impl TrackDiff for TrackDiffDeleted {
    fn breaks_tracking(&self) -> bool {
        true
    }

    fn is_same_as_tracked(&self) -> bool {
        false
    }

    fn to_display_string(&self) -> String {
        TrackDiffDeleted::to_display_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_types::ProofType;

    #[test]
    fn deletion_always_breaks_tracking() {
        let d = TrackDiffDeleted::new(TrackIdComponent::new(ProofType::Github, "bob@github"));
        assert!(d.breaks_tracking());
        assert!(!d.is_same_as_tracked());
        assert_eq!(
            TrackDiff::to_display_string(&d),
            "Deleted proof: github:bob@github"
        );
    }
}
