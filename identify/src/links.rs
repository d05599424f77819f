//! Index over the proof links seen during an identify pass.
//!
//! Built once from an outcome's proof checks (see
//! [`IdentifyOutcome::link_index`](crate::IdentifyOutcome::link_index)) and
//! queried for the active proofs, the derived track set and the tracking
//! statement body.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashSet};

use vouch_types::ProofType;

use crate::check::{LinkCheckResult, RemoteProofLink};
use crate::error::ProofError;
use crate::track::TrackSet;

/// Check state recorded for a proof link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofState {
    Ok,
    TempFailure,
    PermFailure,
    Revoked,
}

impl ProofState {
    pub fn from_check(link: &RemoteProofLink, error: Option<&ProofError>) -> Self {
        if link.revoked {
            return Self::Revoked;
        }
        match error {
            None => Self::Ok,
            Some(e) if e.is_temporary() => Self::TempFailure,
            Some(_) => Self::PermFailure,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::TempFailure => "temp_failure",
            Self::PermFailure => "perm_failure",
            Self::Revoked => "revoked",
        }
    }
}

/// A key/value claim, e.g. `("github", "alice")` or `("dns", "alice.dev")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proof {
    pub key: String,
    pub value: String,
}

/// Proofs grouped by key, used by callers to match identities against
/// external assertions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProofSet {
    proofs: BTreeMap<String, Vec<Proof>>,
}

impl ProofSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, proof: Proof) {
        let bucket = self.proofs.entry(proof.key.clone()).or_default();
        if !bucket.contains(&proof) {
            bucket.push(proof);
        }
    }

    pub fn get(&self, key: &str) -> &[Proof] {
        self.proofs.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of proofs across all keys.
    pub fn len(&self) -> usize {
        self.proofs.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.proofs.is_empty()
    }
}

#[derive(Clone, Debug)]
struct ProofLinkWithState {
    link: RemoteProofLink,
    state: ProofState,
}

/// Proof links indexed by proof type, each list in insertion order.
#[derive(Clone, Debug, Default)]
pub struct RemoteProofLinks {
    links: BTreeMap<ProofType, Vec<ProofLinkWithState>>,
}

impl RemoteProofLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_checks(checks: &[LinkCheckResult]) -> Self {
        let mut index = Self::new();
        for check in checks {
            index.insert(check.link().clone(), check.error());
        }
        index
    }

    pub fn insert(&mut self, link: RemoteProofLink, error: Option<&ProofError>) {
        let state = ProofState::from_check(&link, error);
        self.links
            .entry(link.proof_type)
            .or_default()
            .push(ProofLinkWithState { link, state });
    }

    /// Number of links inserted, active or not.
    pub fn len(&self) -> usize {
        self.links.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Most recent link per identifier, excluding revoked ones.
    ///
    /// A revoked link hides older links with the same identifier.
    fn active_with_state(&self) -> Vec<&ProofLinkWithState> {
        let mut out = Vec::new();
        for list in self.links.values() {
            let mut seen = HashSet::new();
            let mut kept: Vec<&ProofLinkWithState> = list
                .iter()
                .rev()
                .filter(|pl| seen.insert(pl.link.to_display_string()))
                .filter(|pl| pl.state != ProofState::Revoked)
                .collect();
            kept.reverse();
            out.extend(kept);
        }
        out
    }

    pub fn active(&self) -> Vec<RemoteProofLink> {
        self.active_with_state()
            .into_iter()
            .map(|pl| pl.link.clone())
            .collect()
    }

    /// Add every active proof whose check succeeded.
    pub fn add_proofs_to_set(&self, existing: &mut ProofSet) {
        for pl in self.active_with_state() {
            if pl.state != ProofState::Ok {
                continue;
            }
            existing.add(Proof {
                key: pl.link.key.clone(),
                value: pl.link.value.clone(),
            });
        }
    }

    pub fn track_set(&self) -> TrackSet {
        self.active_with_state()
            .into_iter()
            .map(|pl| pl.link.to_track_component())
            .collect()
    }

    /// Body of the tracking statement covering the active proofs.
    pub fn tracking_statement(&self) -> Value {
        let remote_proofs: Vec<Value> = self
            .active_with_state()
            .into_iter()
            .map(|pl| {
                json!({
                    "proof_type": pl.link.proof_type,
                    "key": pl.link.key,
                    "value": pl.link.value,
                    "sig_id": pl.link.sig_id,
                    "state": pl.state.as_str(),
                })
            })
            .collect();
        json!({ "remote_proofs": remote_proofs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(pt: ProofType, key: &str, value: &str, sig: &str) -> RemoteProofLink {
        RemoteProofLink::new(pt, key, value, sig)
    }

    #[test]
    fn state_reflects_check_error() {
        let l = link(ProofType::Github, "github", "alice", "s1");
        assert_eq!(ProofState::from_check(&l, None), ProofState::Ok);
        assert_eq!(
            ProofState::from_check(&l, Some(&ProofError::ServiceUnavailable("503".into()))),
            ProofState::TempFailure
        );
        assert_eq!(
            ProofState::from_check(&l, Some(&ProofError::NotFound("gist".into()))),
            ProofState::PermFailure
        );
        assert_eq!(
            ProofState::from_check(&l.clone().revoked(), None),
            ProofState::Revoked
        );
    }

    #[test]
    fn latest_link_wins_and_revoked_are_hidden() {
        let mut index = RemoteProofLinks::new();
        index.insert(link(ProofType::Twitter, "twitter", "alice", "old"), None);
        index.insert(link(ProofType::Twitter, "twitter", "alice", "new"), None);
        index.insert(link(ProofType::Reddit, "reddit", "alice", "r1"), None);
        index.insert(
            link(ProofType::Reddit, "reddit", "alice", "r2").revoked(),
            None,
        );

        let active = index.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].sig_id, "new");
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn proof_set_only_gets_passing_proofs() {
        let mut index = RemoteProofLinks::new();
        index.insert(link(ProofType::Github, "github", "alice", "g"), None);
        index.insert(
            link(ProofType::Dns, "alice.dev", "dns", "d"),
            Some(&ProofError::NotFound("TXT".into())),
        );

        let mut set = ProofSet::new();
        index.add_proofs_to_set(&mut set);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("github")[0].value, "alice");
        assert!(set.get("alice.dev").is_empty());

        assert_eq!(index.track_set().len(), 2);
    }

    #[test]
    fn tracking_statement_lists_active_proofs() {
        let mut index = RemoteProofLinks::new();
        index.insert(link(ProofType::Github, "github", "alice", "g"), None);
        let stmt = index.tracking_statement();
        let proofs = stmt["remote_proofs"].as_array().unwrap();
        assert_eq!(proofs.len(), 1);
        assert_eq!(proofs[0]["proof_type"], "github");
        assert_eq!(proofs[0]["state"], "ok");
    }
}
