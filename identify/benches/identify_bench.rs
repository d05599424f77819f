use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vouch_identify::{
    IdentifyOutcome, LinkCheckResult, ProofError, RemoteProofLink, RemoteServiceOrder, TrackDiff,
};
use vouch_types::ProofType;

#[derive(Debug)]
struct Changed;

impl TrackDiff for Changed {
    fn breaks_tracking(&self) -> bool {
        false
    }
    fn is_same_as_tracked(&self) -> bool {
        false
    }
    fn to_display_string(&self) -> String {
        "changed".into()
    }
}

fn make_outcome(n: usize) -> IdentifyOutcome {
    let mut outcome = IdentifyOutcome::new("alice", true);
    for i in 0..n {
        let pt = ProofType::ALL[i % ProofType::ALL.len()];
        let link = RemoteProofLink::new(pt, pt.as_str(), format!("user{}", n - i), format!("sig{i}"));
        let result = if i % 7 == 0 {
            Err(ProofError::ServiceUnavailable("timeout".into()))
        } else {
            Ok(())
        };
        outcome.push_proof_check(LinkCheckResult::new(link, result).with_diff(Changed));
    }
    outcome
}

fn bench_outcome(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify_outcome");
    let order = RemoteServiceOrder::default();

    for size in [10, 100, 1000] {
        let outcome = make_outcome(size);

        group.bench_with_input(BenchmarkId::new("track_status", size), &size, |b, _| {
            b.iter(|| black_box(outcome.track_status()));
        });
        group.bench_with_input(BenchmarkId::new("sorted", size), &size, |b, _| {
            b.iter(|| black_box(outcome.proof_checks_sorted(black_box(&order)).len()));
        });
        group.bench_with_input(BenchmarkId::new("report_lax", size), &size, |b, _| {
            b.iter(|| black_box(outcome.get_error_and_warnings(false)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_outcome);
criterion_main!(benches);
