use kdsampler::{BoundingBox, KdNode, KdTree};
use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Two bumps of different height, the sampler should settle on the taller one.
fn score(p: [f64; 2]) -> f64 {
    let bump = |cx: f64, cy: f64, h: f64| h * (-((p[0] - cx).powi(2) + (p[1] - cy).powi(2)) / 200.0).exp();
    bump(25.0, 70.0, 0.5) + bump(70.0, 30.0, 1.0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = KdTree::new(BoundingBox::new([0.0, 0.0], [100.0, 100.0]));
    let mut rng = StdRng::seed_from_u64(123456789);

    // Explore: draw from the tree, score the draw, feed it back
    let mut explored = Vec::with_capacity(2000);
    for _ in 0..2000 {
        let p = tree.sample(&mut rng);
        tree.add(p, score(p));
        explored.push(p);
    }
    println!("{} nodes, max depth {}", tree.node_count(), tree.max_depth());

    let filename = "kdtree_density.svg";
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    // Draw leaf regions shaded by their mean score
    let mut regions = Vec::new();
    collect_regions(tree.root(), &mut regions);
    let max_ev = regions.iter().map(|(_, ev)| *ev).fold(f64::EPSILON, f64::max);

    for (bounds, ev) in &regions {
        let rect = [(bounds.min[0], bounds.min[1]), (bounds.max[0], bounds.max[1])];
        chart.draw_series(std::iter::once(Rectangle::new(
            rect,
            BLUE.mix(0.6 * ev / max_ev).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(rect, BLACK.mix(0.2))))?;
    }

    // Draw explored points
    chart.draw_series(explored.iter().map(|p| Circle::new((p[0], p[1]), 1, RED.filled())))?;

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}

fn collect_regions(node: &KdNode<2>, out: &mut Vec<(BoundingBox<2>, f64)>) {
    match (node.left(), node.right()) {
        (Some(left), Some(right)) => {
            collect_regions(left, out);
            collect_regions(right, out);
        }
        _ => out.push((*node.bounds(), node.expected_value().unwrap_or(0.0))),
    }
}
