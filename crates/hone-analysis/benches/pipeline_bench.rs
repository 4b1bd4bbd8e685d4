//! Full-pipeline benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hone_analysis::orchestrator::PromptOptimizer;
use hone_core::types::Mode;

const SHORT_PROMPT: &str = "Create a login page";

const LONG_PROMPT: &str = "I was wondering if you could migrate the billing service from \
mysql to postgres, it is basically slow and we need it to be fast and scalable, keep the \
existing schema in db/schema.sql, make sure the nightly export in jobs/export.rs still \
works, and add some tests for the cutover, the rollout should happen in phases with a \
rollback plan, also the auth tokens must keep working during the migration and the \
reporting queries should move to a read replica without breaking the dashboards";

fn bench_optimize(c: &mut Criterion) {
    hone_core::logging::init(Some("warn"));
    let optimizer = PromptOptimizer::new();

    c.bench_function("optimize_short_prompt", |b| {
        b.iter(|| {
            optimizer
                .optimize(black_box(SHORT_PROMPT), Mode::Improve, None)
                .unwrap()
        })
    });

    c.bench_function("optimize_long_prompt", |b| {
        b.iter(|| {
            optimizer
                .optimize(black_box(LONG_PROMPT), Mode::Improve, None)
                .unwrap()
        })
    });

    c.bench_function("escalation_analysis", |b| {
        b.iter(|| optimizer.escalation_analysis(black_box(LONG_PROMPT)))
    });
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
