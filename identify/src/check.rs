//! Results of checking individual remote proofs.

use serde::{Deserialize, Serialize};

use vouch_types::ProofType;

use crate::diff::TrackDiff;
use crate::error::ProofError;
use crate::track::TrackIdComponent;

/// A proof link from the identity's signature chain, pointing at a remote claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteProofLink {
    pub proof_type: ProofType,
    /// Service name for social proofs, domain for web and DNS proofs.
    pub key: String,
    /// Username on the service, or the protocol for web proofs.
    pub value: String,
    pub sig_id: String,
    pub revoked: bool,
}

impl RemoteProofLink {
    pub fn new(
        proof_type: ProofType,
        key: impl Into<String>,
        value: impl Into<String>,
        sig_id: impl Into<String>,
    ) -> Self {
        Self {
            proof_type,
            key: key.into(),
            value: value.into(),
            sig_id: sig_id.into(),
            revoked: false,
        }
    }

    pub fn revoked(mut self) -> Self {
        self.revoked = true;
        self
    }

    /// `user@service` for social proofs, the bare domain otherwise.
    pub fn to_display_string(&self) -> String {
        if self.proof_type.is_social() {
            format!("{}@{}", self.value, self.key)
        } else {
            self.key.clone()
        }
    }

    pub fn to_track_component(&self) -> TrackIdComponent {
        TrackIdComponent::new(self.proof_type, self.to_display_string())
    }
}

/// The outcome of checking one remote proof during an identify pass.
#[derive(Debug)]
pub struct LinkCheckResult {
    link: RemoteProofLink,
    error: Option<ProofError>,
    diff: Option<Box<dyn TrackDiff>>,
    remote_diff: Option<Box<dyn TrackDiff>>,
}

impl LinkCheckResult {
    pub fn new(link: RemoteProofLink, result: Result<(), ProofError>) -> Self {
        Self {
            link,
            error: result.err(),
            diff: None,
            remote_diff: None,
        }
    }

    /// Attach the diff against the locally tracked copy of this proof.
    pub fn with_diff(mut self, diff: impl TrackDiff + 'static) -> Self {
        self.diff = Some(Box::new(diff));
        self
    }

    /// Attach the diff against the tracking state observed on the remote side.
    pub fn with_remote_diff(mut self, diff: impl TrackDiff + 'static) -> Self {
        self.remote_diff = Some(Box::new(diff));
        self
    }

    pub fn link(&self) -> &RemoteProofLink {
        &self.link
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&ProofError> {
        self.error.as_ref()
    }

    pub fn diff(&self) -> Option<&dyn TrackDiff> {
        self.diff.as_deref()
    }

    pub fn remote_diff(&self) -> Option<&dyn TrackDiff> {
        self.remote_diff.as_deref()
    }

    pub fn proof_type(&self) -> ProofType {
        self.link.proof_type
    }

    pub fn to_display_string(&self) -> String {
        self.link.to_display_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_proofs_display_as_user_at_service() {
        let link = RemoteProofLink::new(ProofType::Twitter, "twitter", "alice", "sig1");
        assert_eq!(link.to_display_string(), "alice@twitter");
    }

    #[test]
    fn web_proofs_display_as_domain() {
        let link = RemoteProofLink::new(ProofType::GenericWebSite, "alice.dev", "https", "sig2");
        assert_eq!(link.to_display_string(), "alice.dev");
        assert_eq!(
            link.to_track_component(),
            TrackIdComponent::new(ProofType::GenericWebSite, "alice.dev")
        );
    }

    #[test]
    fn failed_check_keeps_its_error() {
        let link = RemoteProofLink::new(ProofType::Github, "github", "alice", "sig3");
        let check = LinkCheckResult::new(link, Err(ProofError::Revoked));
        assert!(!check.is_ok());
        assert_eq!(check.error(), Some(&ProofError::Revoked));
        assert!(check.diff().is_none());
        assert!(check.remote_diff().is_none());
    }
}
