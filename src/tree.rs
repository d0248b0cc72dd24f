use crate::bounds::BoundingBox;
use crate::error::{KdTreeError, Result};
use crate::node::{KdNode, TreeStats};
use crate::sampler::Samples;
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// A value-weighted k-d tree over a fixed `D`-dimensional region.
///
/// Points are inserted together with a scalar value. Sampling walks down from
/// the root, preferring at every split the half whose points carried the higher
/// mean value, and returns a uniform draw from the region it ends up in.
///
/// Values are expected to be non-negative. Negative values are accepted but
/// only ever push the sampling probability towards one side.
#[derive(Clone, Debug)]
pub struct KdTree<const D: usize> {
    bounds: BoundingBox<D>,
    stats: TreeStats,
    root: KdNode<D>,
}

impl<const D: usize> KdTree<D> {
    /// Creates an empty tree over `bounds`.
    ///
    /// The bounds are taken as given, use [`BoundingBox::validated`] or
    /// [`KdTree::from_ranges`] for untrusted input.
    pub fn new(bounds: BoundingBox<D>) -> Self {
        const { assert!(D > 0, "a tree needs at least one dimension") };

        let mut stats = TreeStats::default();
        let root = KdNode::new(bounds, 0, &mut stats);
        Self { bounds, stats, root }
    }

    /// Builds a tree from one `(min, max)` pair per dimension.
    pub fn from_ranges(ranges: &[(f64, f64)]) -> Result<Self> {
        Ok(Self::new(BoundingBox::from_ranges(ranges)?))
    }

    /// Inserts `point` with its `value`.
    ///
    /// Coordinates must be finite. Points outside the tree bounds are accepted
    /// and routed by their coordinates like any other.
    pub fn add(&mut self, point: [f64; D], value: f64) {
        self.root.add(point, value, &mut self.stats);
    }

    /// Checked insertion for runtime-sized points.
    pub fn try_add(&mut self, point: &[f64], value: f64) -> Result<()> {
        let point: [f64; D] = point
            .try_into()
            .map_err(|_| KdTreeError::DimensionMismatch { expected: D, got: point.len() })?;

        if let Some(axis) = point.iter().position(|c| !c.is_finite()) {
            return Err(KdTreeError::NonFiniteCoordinate { axis, value: point[axis] });
        }
        if !value.is_finite() {
            return Err(KdTreeError::NonFiniteValue(value));
        }

        self.add(point, value);
        Ok(())
    }

    /// Draws one point, biased towards regions with a higher mean value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; D] {
        self.root.sample(rng)
    }

    /// An endless iterator of draws using `rng`.
    pub fn samples<R: Rng>(&self, rng: R) -> Samples<'_, D, R> {
        Samples::new(&self.root, rng)
    }

    /// Draws `count` points in parallel.
    ///
    /// Draw `i` uses its own generator seeded from `seed` and `i`, so the
    /// result only depends on the tree and the seed, not on the thread pool.
    pub fn sample_many(&self, count: usize, seed: u64) -> Vec<[f64; D]> {
        (0..count)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                self.root.sample(&mut rng)
            })
            .collect()
    }

    pub fn bounds(&self) -> &BoundingBox<D> {
        &self.bounds
    }

    pub fn root(&self) -> &KdNode<D> {
        &self.root
    }

    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Deepest node depth reached so far; the root is at depth 0.
    pub fn max_depth(&self) -> usize {
        self.stats.max_depth
    }

    /// Total number of nodes created, root included.
    pub fn node_count(&self) -> usize {
        self.stats.node_count
    }

    /// Number of points inserted.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.count() == 0
    }
}
