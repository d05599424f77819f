//! Display precedence for proof categories.

use serde::{Deserialize, Serialize};

use vouch_types::ProofType;

/// Ordered list of proof types used to group proofs for display.
///
/// This is a partial order over [`ProofType`]: proof types that do not
/// appear in the list are omitted from ordered output entirely, with no
/// fallback group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteServiceOrder(Vec<ProofType>);

impl RemoteServiceOrder {
    /// Build an order from `types`; repeated entries keep their first position.
    pub fn new(types: impl IntoIterator<Item = ProofType>) -> Self {
        let mut order = Vec::new();
        for pt in types {
            if !order.contains(&pt) {
                order.push(pt);
            }
        }
        Self(order)
    }

    pub fn iter(&self) -> impl Iterator<Item = ProofType> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, proof_type: ProofType) -> bool {
        self.0.contains(&proof_type)
    }

    /// Rank of `proof_type`, or `None` if it is not ordered.
    pub fn position(&self, proof_type: ProofType) -> Option<usize> {
        self.0.iter().position(|pt| *pt == proof_type)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RemoteServiceOrder {
    /// Every production service. The staging-only `Rooter` service is left
    /// out so it never shows in user-facing lists.
    fn default() -> Self {
        Self(vec![
            ProofType::Keybase,
            ProofType::Twitter,
            ProofType::Github,
            ProofType::Reddit,
            ProofType::Coinbase,
            ProofType::HackerNews,
            ProofType::Facebook,
            ProofType::GenericWebSite,
            ProofType::Dns,
        ])
    }
}
