//! Tracking snapshots — what was recorded the last time an identity was verified.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use vouch_types::{ProofType, Timestamp};

use crate::diff::TrackDiffDeleted;

/// One tracked proof, identified by its category and display identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrackIdComponent {
    pub proof_type: ProofType,
    pub identifier: String,
}

impl TrackIdComponent {
    pub fn new(proof_type: ProofType, identifier: impl Into<String>) -> Self {
        Self {
            proof_type,
            identifier: identifier.into(),
        }
    }

    /// `type:identifier`, the form used in tracking statements and messages.
    pub fn to_id_string(&self) -> String {
        format!("{}:{}", self.proof_type, self.identifier)
    }
}

impl fmt::Display for TrackIdComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.proof_type, self.identifier)
    }
}

/// An ordered set of tracked components.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSet {
    components: BTreeSet<TrackIdComponent>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the component was already present.
    pub fn insert(&mut self, component: TrackIdComponent) -> bool {
        self.components.insert(component)
    }

    pub fn contains(&self, component: &TrackIdComponent) -> bool {
        self.components.contains(component)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackIdComponent> {
        self.components.iter()
    }

    /// Whether both sets hold exactly the same components.
    pub fn equal(&self, other: &TrackSet) -> bool {
        self.components == other.components
    }

    /// Components in `self` that are missing from `other`, in set order.
    pub fn subtract(&self, other: &TrackSet) -> Vec<TrackIdComponent> {
        self.components.difference(&other.components).cloned().collect()
    }
}

impl FromIterator<TrackIdComponent> for TrackSet {
    fn from_iter<I: IntoIterator<Item = TrackIdComponent>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

/// The prior tracking snapshot an identify pass is compared against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLookup {
    components: TrackSet,
    ctime: Timestamp,
}

impl TrackLookup {
    pub fn new(components: TrackSet, ctime: Timestamp) -> Self {
        Self { components, ctime }
    }

    pub fn components(&self) -> &TrackSet {
        &self.components
    }

    /// When the snapshot was recorded.
    pub fn ctime(&self) -> Timestamp {
        self.ctime
    }

    /// Deletion events for every tracked component absent from `observed`.
    pub fn deleted_since(&self, observed: &TrackSet) -> Vec<TrackDiffDeleted> {
        self.components
            .subtract(observed)
            .into_iter()
            .map(TrackDiffDeleted::new)
            .collect()
    }

    /// Whether `observed` would produce the same tracking statement.
    pub fn matches(&self, observed: &TrackSet) -> bool {
        self.components.equal(observed)
    }
}
