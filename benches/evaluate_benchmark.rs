use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use minimax::test_utils::uniform_tree;

pub fn evaluate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    // 6^6 leaves
    let tree = uniform_tree(6, 6, |_| rng.gen_range(-1000, 1000));
    c.bench_function("evaluate 6x6", |b| b.iter(|| {
        let mut tree = tree.clone();
        black_box(tree.evaluate_root())
    }));
}

pub fn build_benchmark(c: &mut Criterion) {
    c.bench_function("build 6x6", |b| b.iter(|| uniform_tree(6, 6, |label| black_box(label as i64 % 17))));
}

pub fn principal_variation_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tree = uniform_tree(6, 6, |_| rng.gen_range(-1000, 1000));
    tree.evaluate_root();
    c.bench_function("principal variation 6x6", |b| b.iter(|| tree.principal_variation(tree.root())));
}

criterion_group!(evaluate_benches, evaluate_benchmark, build_benchmark, principal_variation_benchmark);
criterion_main!(evaluate_benches);
