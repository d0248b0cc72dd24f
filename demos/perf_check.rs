use kdsampler::{BoundingBox, KdTree};
use rand::Rng;

fn main() {
    // Initialize Rayon explicitly so thread creation (clone3) happens
    // before the heavy sampling we want to profile.
    rayon::ThreadPoolBuilder::new().build_global().unwrap();

    let bounds = BoundingBox::new([0.0; 3], [100.0; 3]);
    let mut tree = KdTree::new(bounds);

    // One million scored points is enough to reach a realistic depth
    let mut rng = rand::thread_rng();
    for _ in 0..1_000_000 {
        let p: [f64; 3] = [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)];
        let value = 1.0 / (1.0 + (p[0] - 50.0).powi(2) + (p[1] - 50.0).powi(2) + (p[2] - 50.0).powi(2));
        tree.add(p, value);
    }

    // Parallel sampling (this is the hot path)
    let samples = tree.sample_many(1_000_000, 123456789);
    println!(
        "{} samples, {} nodes, max depth {}",
        samples.len(),
        tree.node_count(),
        tree.max_depth()
    );
}
