use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stagecraft_testing::build_chain;
use stagecraft_ui::Layout;

const DEPTH_SAMPLES: &[usize] = &[8, 64, 256];

fn bench_validate_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_clean");
    for &depth in DEPTH_SAMPLES {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let chain = build_chain(depth).expect("chain builds");
            let root = chain.root();
            let layout = root.as_layout().expect("root takes part in layout");
            layout.validate();

            b.iter(|| {
                layout.validate();
                black_box(layout.needs_layout());
            });
        });
    }
    group.finish();
}

fn bench_invalidate_and_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("invalidate_and_validate");
    for &depth in DEPTH_SAMPLES {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let chain = build_chain(depth).expect("chain builds");
            let root = chain.root();
            let layout = root.as_layout().expect("root takes part in layout");
            layout.validate();

            // every pass re-lays out the whole chain from the deepest leaf up
            b.iter(|| {
                chain.leaf.invalidate_hierarchy();
                layout.validate();
                black_box(chain.probe.layout_count());
            });
        });
    }
    group.finish();
}

fn bench_invalidate_hierarchy(c: &mut Criterion) {
    let mut group = c.benchmark_group("invalidate_hierarchy");
    for &depth in DEPTH_SAMPLES {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let chain = build_chain(depth).expect("chain builds");

            b.iter(|| {
                chain.leaf.invalidate_hierarchy();
                black_box(chain.leaf.needs_layout());
            });
        });
    }
    group.finish();
}

criterion_group!(
    validate,
    bench_validate_clean,
    bench_invalidate_and_validate,
    bench_invalidate_hierarchy
);
criterion_main!(validate);
