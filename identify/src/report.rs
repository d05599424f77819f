//! Warning and error report for a finished identify pass.

use tracing::warn;

use vouch_types::Warnings;
use vouch_utils::give_me_an_s;

use crate::error::IdentifyError;
use crate::outcome::IdentifyOutcome;

/// Warnings plus an optional combined error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifyReport {
    pub warnings: Warnings,
    pub error: Option<IdentifyError>,
}

impl IdentifyReport {
    /// No warnings and no error.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.error.is_none()
    }

    pub fn into_parts(self) -> (Warnings, Option<IdentifyError>) {
        (self.warnings, self.error)
    }
}

impl IdentifyOutcome {
    /// Build the diagnostics report.
    ///
    /// A terminal error is returned as is. Otherwise deletions and proof
    /// failures become warnings when `strict` is false and problems when it
    /// is true; broken track components are always problems. Problems are
    /// joined with `;` into a single [`IdentifyError::Problems`].
    pub fn get_error_and_warnings(&self, strict: bool) -> IdentifyReport {
        if let Some(err) = &self.error {
            return IdentifyReport {
                warnings: Warnings::new(),
                error: Some(err.clone()),
            };
        }

        let mut warnings = Warnings::new();
        let mut problems: Vec<String> = Vec::new();

        let mut soft = |msg: String| {
            if strict {
                problems.push(msg);
            } else {
                warnings.push(msg);
            }
        };

        for deleted in self.deleted() {
            soft(deleted.to_display_string());
        }

        let nfails = self.num_proof_failures();
        if nfails > 0 {
            soft(format!(
                "{nfails} proof{} failed remote checks",
                give_me_an_s(nfails)
            ));
        }

        let ntf = self.num_track_failures();
        if ntf > 0 {
            for detail in self.track_failure_details() {
                warn!(username = %self.username(), %detail, "track component failed");
            }
            problems.push(format!("{ntf} track component{} failed", give_me_an_s(ntf)));
        }

        let error = if problems.is_empty() {
            None
        } else {
            Some(IdentifyError::Problems(problems.join(";")))
        };

        IdentifyReport { warnings, error }
    }

    /// The strict-mode error, if any.
    pub fn get_error(&self) -> Option<IdentifyError> {
        self.get_error_and_warnings(true).error
    }

    /// The lax-mode report: soft problems come back as warnings.
    pub fn get_error_lax(&self) -> IdentifyReport {
        self.get_error_and_warnings(false)
    }
}
