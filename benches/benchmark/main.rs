use criterion::criterion_main;


criterion_main!(
    core::core_benches,
    apply::apply_benches,
    aggregate::aggregate_benches,
);
