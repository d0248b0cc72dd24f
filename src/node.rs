use crate::bounds::BoundingBox;
use rand::Rng;

/// Global bookkeeping shared by every node of one tree.
///
/// Nodes report themselves here on construction instead of holding a
/// reference back to the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Deepest depth of any node created so far.
    pub max_depth: usize,
    /// Total number of nodes ever created, root included.
    pub node_count: usize,
}

impl TreeStats {
    fn record(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        self.node_count += 1;
    }
}

#[derive(Clone, Debug)]
enum NodeState<const D: usize> {
    Empty,
    Leaf { point: [f64; D], value: f64 },
    // [left, right]
    Split { children: Box<[KdNode<D>; 2]> },
}

/// A node of the value-weighted k-d tree.
///
/// Every node covers a region and bisects it along `depth % D` at the
/// region's midpoint. A node starts empty, holds a single point after its
/// first insertion, and splits into two children on its second.
#[derive(Clone, Debug)]
pub struct KdNode<const D: usize> {
    bounds: BoundingBox<D>,
    depth: usize,
    axis: usize,
    mid_point: f64,
    value_sum: f64,
    count: usize,
    state: NodeState<D>,
}

impl<const D: usize> KdNode<D> {
    pub(crate) fn new(bounds: BoundingBox<D>, depth: usize, stats: &mut TreeStats) -> Self {
        stats.record(depth);

        let axis = depth % D;
        KdNode {
            bounds,
            depth,
            axis,
            mid_point: bounds.mid_point(axis),
            value_sum: 0.0,
            count: 0,
            state: NodeState::Empty,
        }
    }

    pub(crate) fn add(&mut self, point: [f64; D], value: f64, stats: &mut TreeStats) {
        let (held_count, held_sum) = (self.count, self.value_sum);
        self.value_sum += value;
        self.count += 1;

        let side = self.side_of(&point);
        match &mut self.state {
            NodeState::Empty => {
                self.state = NodeState::Leaf { point, value };
            }
            // Identical points can never be separated by bisection, the leaf
            // absorbs the duplicate into its statistics instead.
            NodeState::Leaf { point: stored, .. } if *stored == point => {}
            NodeState::Leaf { point: stored, value: stored_value } => {
                let (stored, stored_value) = (*stored, *stored_value);
                let mut children = self.create_children(stats);

                // The stored point moves down first, then the new one follows.
                children[self.side_of(&stored)].adopt(stored, stored_value, held_count, held_sum);
                children[side].add(point, value, stats);

                self.state = NodeState::Split { children };
            }
            NodeState::Split { children } => {
                children[side].add(point, value, stats);
            }
        }
    }

    /// Turns a fresh empty node into a leaf carrying statistics that were
    /// already accumulated by its parent.
    fn adopt(&mut self, point: [f64; D], value: f64, count: usize, value_sum: f64) {
        debug_assert!(self.is_empty());
        self.count = count;
        self.value_sum = value_sum;
        self.state = NodeState::Leaf { point, value };
    }

    fn create_children(&self, stats: &mut TreeStats) -> Box<[KdNode<D>; 2]> {
        let (lower, upper) = self.bounds.split(self.axis, self.mid_point);
        let left = KdNode::new(lower, self.depth + 1, stats);
        let right = KdNode::new(upper, self.depth + 1, stats);
        Box::new([left, right])
    }

    /// 0 for left, 1 for right. Points on the midpoint go right.
    fn side_of(&self, point: &[f64; D]) -> usize {
        if point[self.axis] < self.mid_point { 0 } else { 1 }
    }

    /// Draws a point from this node's region.
    ///
    /// Split nodes pick a child with probability proportional to the
    /// children's expected values and recurse. Empty and leaf nodes return a
    /// fresh uniform draw over their region, never the stored point.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; D] {
        let mut node = self;
        while let NodeState::Split { children } = &node.state {
            let p = node.left_probability().unwrap_or(0.5);
            let u: f64 = rng.r#gen();
            node = if u < p { &children[0] } else { &children[1] };
        }
        node.bounds.sample_uniform(rng)
    }

    /// Probability that sampling descends into the left child.
    ///
    /// `None` unless the node is split. Falls back to 0.5 while either child is
    /// still empty, or when the two expected values sum to zero. Negative
    /// expected values are clamped into `[0, 1]`.
    pub fn left_probability(&self) -> Option<f64> {
        let NodeState::Split { children } = &self.state else {
            return None;
        };
        let [left, right] = &**children;

        let (Some(l), Some(r)) = (left.expected_value(), right.expected_value()) else {
            return Some(0.5);
        };

        let p = l / (l + r);
        if p.is_finite() { Some(p.clamp(0.0, 1.0)) } else { Some(0.5) }
    }

    pub fn bounds(&self) -> &BoundingBox<D> {
        &self.bounds
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn split_axis(&self) -> usize {
        self.axis
    }

    pub fn mid_point(&self) -> f64 {
        self.mid_point
    }

    /// Number of points ever inserted at or below this node.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn value_sum(&self) -> f64 {
        self.value_sum
    }

    /// Mean value of everything inserted at or below this node, `None` before
    /// the first insertion.
    pub fn expected_value(&self) -> Option<f64> {
        if self.count > 0 { Some(self.value_sum / self.count as f64) } else { None }
    }

    /// The stored point, only while the node is a leaf.
    pub fn point(&self) -> Option<&[f64; D]> {
        match &self.state {
            NodeState::Leaf { point, .. } => Some(point),
            _ => None,
        }
    }

    /// The stored value, only while the node is a leaf.
    pub fn value(&self) -> Option<f64> {
        match &self.state {
            NodeState::Leaf { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&KdNode<D>> {
        match &self.state {
            NodeState::Split { children } => Some(&children[0]),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&KdNode<D>> {
        match &self.state {
            NodeState::Split { children } => Some(&children[1]),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, NodeState::Empty)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.state, NodeState::Leaf { .. })
    }

    pub fn is_split(&self) -> bool {
        matches!(self.state, NodeState::Split { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn unit_square(stats: &mut TreeStats) -> KdNode<2> {
        KdNode::new(BoundingBox::new([0.0, 0.0], [1.0, 1.0]), 0, stats)
    }

    #[test]
    fn test_construction_reports_stats() {
        let mut stats = TreeStats::default();
        let node = KdNode::new(BoundingBox::new([0.0; 3], [2.0, 4.0, 6.0]), 4, &mut stats);

        assert_eq!(stats, TreeStats { max_depth: 4, node_count: 1 });
        assert_eq!(node.split_axis(), 1);
        assert_eq!(node.mid_point(), 2.0);
        assert!(node.is_empty());
        assert_eq!(node.expected_value(), None);
    }

    #[test]
    fn test_leaf_then_split() {
        let mut stats = TreeStats::default();
        let mut node = unit_square(&mut stats);

        node.add([0.2, 0.2], 3.0, &mut stats);
        assert!(node.is_leaf());
        assert_eq!(node.point(), Some(&[0.2, 0.2]));
        assert_eq!(node.value(), Some(3.0));

        node.add([0.8, 0.2], 1.0, &mut stats);
        assert!(node.is_split());
        assert_eq!(node.point(), None);
        assert_eq!(node.value(), None);
        assert_eq!(node.count(), 2);
        assert_eq!(node.expected_value(), Some(2.0));
        assert_eq!(stats.node_count, 3);

        let left = node.left().unwrap();
        let right = node.right().unwrap();
        assert_eq!(left.value(), Some(3.0));
        assert_eq!(right.value(), Some(1.0));
        assert_eq!(node.left_probability(), Some(0.75));
    }

    #[test]
    fn test_coincident_point_is_absorbed() {
        let mut stats = TreeStats::default();
        let mut node = unit_square(&mut stats);

        node.add([0.1, 0.1], 1.0, &mut stats);
        node.add([0.1, 0.1], 3.0, &mut stats);

        assert!(node.is_leaf());
        assert_eq!(node.value(), Some(1.0));
        assert_eq!(node.count(), 2);
        assert_eq!(node.expected_value(), Some(2.0));
        assert_eq!(stats.node_count, 1);

        // A distinct point still splits the leaf and carries the stored pair down
        node.add([0.1, 0.9], 5.0, &mut stats);
        assert!(node.is_split());
        let left = node.left().unwrap();
        assert_eq!(left.count(), 2);
        assert_eq!(node.expected_value(), Some(3.0));
    }

    #[test]
    fn test_left_probability_fallbacks() {
        let mut stats = TreeStats::default();
        let mut node = unit_square(&mut stats);
        assert_eq!(node.left_probability(), None);

        node.add([0.1, 0.5], 1.0, &mut stats);
        assert_eq!(node.left_probability(), None);

        // Both points on the left, right child never receives data
        node.add([0.2, 0.5], 1.0, &mut stats);
        assert_eq!(node.left_probability(), Some(0.5));

        // Opposite values cancel in the denominator
        let mut stats = TreeStats::default();
        let mut node = unit_square(&mut stats);
        node.add([0.1, 0.5], -2.0, &mut stats);
        node.add([0.9, 0.5], 2.0, &mut stats);
        assert_eq!(node.left_probability(), Some(0.5));

        // Mixed signs clamp to a valid probability
        let mut stats = TreeStats::default();
        let mut node = unit_square(&mut stats);
        node.add([0.1, 0.5], -1.0, &mut stats);
        node.add([0.9, 0.5], 3.0, &mut stats);
        assert_eq!(node.left_probability(), Some(0.0));
    }

    #[test]
    fn test_sample_stays_in_region() {
        let mut stats = TreeStats::default();
        let mut node = unit_square(&mut stats);
        let mut rng = StdRng::seed_from_u64(1);

        for i in 0..50 {
            let p = node.sample(&mut rng);
            assert!(node.bounds().contains(&p));
            let x = (i as f64 * 0.37) % 1.0;
            let y = (i as f64 * 0.61) % 1.0;
            node.add([x, y], 1.0 + x, &mut stats);
        }
    }
}
