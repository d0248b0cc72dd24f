use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kdsampler::{BoundingBox, KdTree};
use rand::prelude::*;
use rand::rngs::StdRng;

fn build_tree(count: usize) -> KdTree<3> {
    let mut tree = KdTree::new(BoundingBox::new([0.0; 3], [100.0; 3]));
    let mut rng = StdRng::seed_from_u64(123456789);
    for _ in 0..count {
        let p = [rng.r#gen::<f64>() * 100.0, rng.r#gen::<f64>() * 100.0, rng.r#gen::<f64>() * 100.0];
        tree.add(p, rng.r#gen::<f64>());
    }
    tree
}

fn benchmark_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for &size in &[1_000usize, 100_000] {
        let tree = build_tree(size);

        group.bench_with_input(BenchmarkId::new("single", size), &tree, |b, tree| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(tree.sample(&mut rng)))
        });

        group.bench_with_input(BenchmarkId::new("batch_10000", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.sample_many(10_000, 1)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_sample);
criterion_main!(benches);
