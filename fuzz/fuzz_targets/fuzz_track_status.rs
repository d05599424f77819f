#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vouch_identify::{
    IdentifyOutcome, LinkCheckResult, ProofError, RemoteProofLink, RemoteServiceOrder, TrackDiff,
    TrackLookup,
};
use vouch_types::{ProofType, Timestamp, TrackStatus};

#[derive(Debug, Arbitrary)]
struct Diff {
    breaks: bool,
    changed: bool,
}

impl TrackDiff for Diff {
    fn breaks_tracking(&self) -> bool {
        self.breaks
    }
    fn is_same_as_tracked(&self) -> bool {
        !self.breaks && !self.changed
    }
    fn to_display_string(&self) -> String {
        format!("{self:?}")
    }
}

#[derive(Debug, Arbitrary)]
struct Check {
    proof_type: u8,
    user: String,
    ok: bool,
    diff: Option<Diff>,
    remote_diff: Option<Diff>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    checks: Vec<Check>,
    key_diffs: Vec<Diff>,
    prior: bool,
}

fuzz_target!(|input: Input| {
    let mut outcome = IdentifyOutcome::new("fuzz", false);
    for check in input.checks {
        let pt = ProofType::ALL[check.proof_type as usize % ProofType::ALL.len()];
        let link = RemoteProofLink::new(pt, pt.as_str(), check.user, "sig");
        let result = if check.ok {
            Ok(())
        } else {
            Err(ProofError::Other("fuzz".into()))
        };
        let mut lcr = LinkCheckResult::new(link, result);
        if let Some(d) = check.diff {
            lcr = lcr.with_diff(d);
        }
        if let Some(d) = check.remote_diff {
            lcr = lcr.with_remote_diff(d);
        }
        outcome.push_proof_check(lcr);
    }
    for d in input.key_diffs {
        outcome.push_key_diff(d);
    }
    if input.prior {
        outcome.track_used = Some(TrackLookup::new(Default::default(), Timestamp::EPOCH));
    }

    let status = outcome.track_status();
    assert!(TrackStatus::ALL.contains(&status));
    assert!(outcome.num_track_failures() <= outcome.num_track_changes());

    let strict = outcome.get_error_and_warnings(true);
    assert!(strict.warnings.is_empty());
    let clean = outcome.num_deleted() == 0
        && outcome.num_proof_failures() == 0
        && outcome.num_track_failures() == 0;
    assert_eq!(strict.error.is_none(), clean);

    let sorted = outcome.proof_checks_sorted(&RemoteServiceOrder::default());
    assert!(sorted.len() <= outcome.proof_checks().len());
});
