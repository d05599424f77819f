//! Identify policy configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use vouch_types::ProofType;
use vouch_utils::LogFormat;

use crate::error::ConfigError;
use crate::order::RemoteServiceOrder;
use crate::outcome::IdentifyOutcome;
use crate::report::IdentifyReport;

/// Policy applied to identify passes.
///
/// Can be loaded from a TOML file via [`IdentifyConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyConfig {
    /// Group order for proof display lists. Unlisted proof types are hidden.
    #[serde(default)]
    pub service_order: RemoteServiceOrder,

    /// Treat deletions and failed proofs as errors rather than warnings.
    #[serde(default = "default_true")]
    pub strict: bool,

    /// Skip remote checks and rely on cached results.
    #[serde(default)]
    pub local_only: bool,

    /// Approve remote tracking changes without prompting.
    #[serde(default)]
    pub approve_remote: bool,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl IdentifyConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("IdentifyConfig is always serializable to TOML")
    }

    /// Start an outcome with this config's policy flags applied.
    pub fn new_outcome(&self, username: impl Into<String>, me_set: bool) -> IdentifyOutcome {
        let mut outcome = IdentifyOutcome::new(username, me_set);
        outcome.local_only = self.local_only;
        outcome.approve_remote = self.approve_remote;
        outcome
    }

    /// Diagnostics for `outcome` in the configured mode.
    pub fn report(&self, outcome: &IdentifyOutcome) -> IdentifyReport {
        outcome.get_error_and_warnings(self.strict)
    }

    /// Install the global log subscriber described by this config.
    ///
    /// Returns `false` if a subscriber was already installed.
    pub fn init_logging(&self) -> bool {
        vouch_utils::init_logging(self.log_format, &self.log_level)
    }

    /// Whether proofs of this type appear in display lists.
    pub fn displays(&self, proof_type: ProofType) -> bool {
        self.service_order.contains(proof_type)
    }
}

impl Default for IdentifyConfig {
    fn default() -> Self {
        Self {
            service_order: RemoteServiceOrder::default(),
            strict: default_true(),
            local_only: false,
            approve_remote: false,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
