//! The aggregate result of one identify pass.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;
use tracing::{debug, warn};

use vouch_types::{ProofType, TrackStatus, Warnings};

use crate::check::{LinkCheckResult, RemoteProofLink};
use crate::diff::{TrackDiff, TrackDiffDeleted};
use crate::error::IdentifyError;
use crate::links::{ProofSet, RemoteProofLinks};
use crate::order::RemoteServiceOrder;
use crate::status::{classify, TrackCounts};
use crate::track::{TrackLookup, TrackSet};

/// Everything learned about one identity during a single identify pass.
///
/// The verification pipeline owns the outcome while it populates it through
/// the `push_*` methods. Proof checks, key diffs and deletions are
/// append-only. Once population is complete the outcome is only read, and
/// may be shared across threads by reference.
#[derive(Debug)]
pub struct IdentifyOutcome {
    username: String,
    /// Fatal error for the whole pass. Overrides every other diagnostic.
    pub error: Option<IdentifyError>,
    key_diffs: Vec<Box<dyn TrackDiff>>,
    deleted: Vec<TrackDiffDeleted>,
    proof_checks: Vec<LinkCheckResult>,
    /// Warnings accumulated by callers, separate from the generated report.
    pub warnings: Warnings,
    /// The prior tracking snapshot, if this identity was tracked before.
    pub track_used: Option<TrackLookup>,
    /// Whether the new tracking statement is identical to the prior one.
    pub track_equal: bool,
    me_set: bool,
    pub local_only: bool,
    pub approve_remote: bool,
    links: OnceLock<RemoteProofLinks>,
}

impl IdentifyOutcome {
    /// Start an empty outcome. `me_set` records whether a logged-in local
    /// identity existed when the pass began.
    pub fn new(username: impl Into<String>, me_set: bool) -> Self {
        Self {
            username: username.into(),
            error: None,
            key_diffs: Vec::new(),
            deleted: Vec::new(),
            proof_checks: Vec::new(),
            warnings: Warnings::new(),
            track_used: None,
            track_equal: false,
            me_set,
            local_only: false,
            approve_remote: false,
            links: OnceLock::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn me_set(&self) -> bool {
        self.me_set
    }

    // ── Population ─────────────────────────────────────────────────────

    pub fn push_proof_check(&mut self, check: LinkCheckResult) {
        if self.links.get().is_some() {
            warn!(
                username = %self.username,
                proof = %check.to_display_string(),
                "proof check added after the link index was built; index will not include it"
            );
        }
        self.proof_checks.push(check);
    }

    pub fn push_key_diff(&mut self, diff: impl TrackDiff + 'static) {
        self.key_diffs.push(Box::new(diff));
    }

    pub fn push_deleted(&mut self, deleted: TrackDiffDeleted) {
        self.deleted.push(deleted);
    }

    pub fn proof_checks(&self) -> &[LinkCheckResult] {
        &self.proof_checks
    }

    pub fn key_diffs(&self) -> &[Box<dyn TrackDiff>] {
        &self.key_diffs
    }

    pub fn deleted(&self) -> &[TrackDiffDeleted] {
        &self.deleted
    }

    // ── Counts ─────────────────────────────────────────────────────────

    pub fn num_deleted(&self) -> usize {
        self.deleted.len()
    }

    pub fn num_proof_failures(&self) -> usize {
        self.proof_checks.iter().filter(|c| !c.is_ok()).count()
    }

    pub fn num_proof_successes(&self) -> usize {
        self.proof_checks.iter().filter(|c| c.is_ok()).count()
    }

    /// Diffs that break tracking. A proof check whose local and remote diffs
    /// both break tracking counts twice.
    pub fn num_track_failures(&self) -> usize {
        self.count_diffs(|d| d.breaks_tracking())
    }

    /// Diffs that differ from what was tracked, counted like
    /// [`num_track_failures`](Self::num_track_failures).
    pub fn num_track_changes(&self) -> usize {
        self.count_diffs(|d| !d.is_same_as_tracked())
    }

    fn count_diffs(&self, pred: impl Fn(&dyn TrackDiff) -> bool) -> usize {
        let from_checks: usize = self
            .proof_checks
            .iter()
            .map(|c| {
                [c.diff(), c.remote_diff()]
                    .into_iter()
                    .flatten()
                    .filter(|d| pred(*d))
                    .count()
            })
            .sum();
        let from_keys = self
            .key_diffs
            .iter()
            .map(Box::as_ref)
            .filter(|d| pred(*d))
            .count();
        from_checks + from_keys
    }

    /// One line per diff that breaks tracking, in counting order.
    pub fn track_failure_details(&self) -> Vec<String> {
        let mut details = Vec::new();
        for check in &self.proof_checks {
            for diff in [check.diff(), check.remote_diff()].into_iter().flatten() {
                if diff.breaks_tracking() {
                    details.push(format!(
                        "{}: {}",
                        check.to_display_string(),
                        diff.to_display_string()
                    ));
                }
            }
        }
        for diff in &self.key_diffs {
            if diff.breaks_tracking() {
                details.push(diff.to_display_string());
            }
        }
        details
    }

    // ── Verdict ────────────────────────────────────────────────────────

    pub fn track_counts(&self) -> TrackCounts {
        TrackCounts {
            track_failures: self.num_track_failures(),
            deleted: self.num_deleted(),
            prior_tracked: self.track_used.is_some(),
            track_changes: self.num_track_changes(),
            proof_successes: self.num_proof_successes(),
            proof_failures: self.num_proof_failures(),
        }
    }

    pub fn track_status(&self) -> TrackStatus {
        let counts = self.track_counts();
        let status = classify(&counts);
        debug!(
            username = %self.username,
            %status,
            track_failures = counts.track_failures,
            deleted = counts.deleted,
            prior_tracked = counts.prior_tracked,
            track_changes = counts.track_changes,
            proof_successes = counts.proof_successes,
            proof_failures = counts.proof_failures,
            "classified identify outcome"
        );
        status
    }

    // ── Display order ──────────────────────────────────────────────────

    /// Proof checks grouped by proof type in `order`, each group sorted by
    /// display string. Proof types missing from `order` are left out.
    pub fn proof_checks_sorted(&self, order: &RemoteServiceOrder) -> Vec<&LinkCheckResult> {
        let mut by_type: HashMap<ProofType, Vec<&LinkCheckResult>> = HashMap::new();
        for check in &self.proof_checks {
            by_type.entry(check.proof_type()).or_default().push(check);
        }

        let mut sorted = Vec::with_capacity(self.proof_checks.len());
        for proof_type in order.iter() {
            if let Some(mut group) = by_type.remove(&proof_type) {
                group.sort_by_cached_key(|c| c.to_display_string());
                sorted.extend(group);
            }
        }
        sorted
    }

    pub fn proof_checks_sorted_default(&self) -> Vec<&LinkCheckResult> {
        self.proof_checks_sorted(&RemoteServiceOrder::default())
    }

    // ── Link index ─────────────────────────────────────────────────────

    /// The link index over the current proof checks, built on first use.
    ///
    /// The index is never rebuilt: checks pushed after the first call are
    /// not reflected. Concurrent first calls are safe; exactly one build
    /// is kept.
    pub fn link_index(&self) -> &RemoteProofLinks {
        self.links.get_or_init(|| {
            let index = RemoteProofLinks::from_checks(&self.proof_checks);
            debug!(
                username = %self.username,
                links = index.len(),
                "built remote proof link index"
            );
            index
        })
    }

    /// Build the link index now. Call once population is complete.
    pub fn seal_links(&self) {
        self.link_index();
    }

    pub fn active_proofs(&self) -> Vec<RemoteProofLink> {
        self.link_index().active()
    }

    pub fn add_proofs_to_set(&self, existing: &mut ProofSet) {
        self.link_index().add_proofs_to_set(existing);
    }

    pub fn track_set(&self) -> TrackSet {
        self.link_index().track_set()
    }

    pub fn tracking_statement(&self) -> Value {
        self.link_index().tracking_statement()
    }
}
