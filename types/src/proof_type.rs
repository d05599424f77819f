//! Remote proof categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// The category of service a remote proof is published on.
///
/// Display lists are grouped by this value, and the group order is set by
/// a configurable service order rather than by the enum declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofType {
    Keybase,
    Twitter,
    Github,
    Reddit,
    Coinbase,
    HackerNews,
    Facebook,
    GenericWebSite,
    Dns,
    /// Test-only service used by staging deployments.
    Rooter,
}

impl ProofType {
    /// Every proof type, in declaration order.
    pub const ALL: [ProofType; 10] = [
        Self::Keybase,
        Self::Twitter,
        Self::Github,
        Self::Reddit,
        Self::Coinbase,
        Self::HackerNews,
        Self::Facebook,
        Self::GenericWebSite,
        Self::Dns,
        Self::Rooter,
    ];

    /// Stable machine name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keybase => "keybase",
            Self::Twitter => "twitter",
            Self::Github => "github",
            Self::Reddit => "reddit",
            Self::Coinbase => "coinbase",
            Self::HackerNews => "hacker_news",
            Self::Facebook => "facebook",
            Self::GenericWebSite => "generic_web_site",
            Self::Dns => "dns",
            Self::Rooter => "rooter",
        }
    }

    /// Whether the proof is a username on a social service, as opposed to a
    /// proof hosted on a domain the identity controls.
    pub fn is_social(&self) -> bool {
        !matches!(self, Self::Keybase | Self::GenericWebSite | Self::Dns)
    }
}

impl fmt::Display for ProofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProofType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|pt| pt.as_str() == s)
            .ok_or_else(|| TypesError::UnknownProofType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_machine_name() {
        for pt in ProofType::ALL {
            assert_eq!(pt.as_str().parse::<ProofType>().unwrap(), pt);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "myspace".parse::<ProofType>().unwrap_err();
        assert_eq!(err, TypesError::UnknownProofType("myspace".into()));
    }

    #[test]
    fn web_proofs_are_not_social() {
        assert!(ProofType::Twitter.is_social());
        assert!(!ProofType::Dns.is_social());
        assert!(!ProofType::GenericWebSite.is_social());
    }

    #[test]
    fn serde_name_matches_as_str() {
        let json = serde_json::to_string(&ProofType::HackerNews).unwrap();
        assert_eq!(json, "\"hacker_news\"");
    }
}
