use crate::node::KdNode;
use rand::Rng;

/// Endless iterator of value-weighted draws from a tree.
///
/// Created by [`KdTree::samples`](crate::KdTree::samples). Borrows the tree,
/// so no points can be inserted while it is alive.
pub struct Samples<'a, const D: usize, R: Rng> {
    root: &'a KdNode<D>,
    rng: R,
}

impl<'a, const D: usize, R: Rng> Samples<'a, D, R> {
    pub(crate) fn new(root: &'a KdNode<D>, rng: R) -> Self {
        Samples { root, rng }
    }

    /// Hands back the generator, e.g. to keep a seeded sequence going.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<'a, const D: usize, R: Rng> Iterator for Samples<'a, D, R> {
    type Item = [f64; D];

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.root.sample(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
