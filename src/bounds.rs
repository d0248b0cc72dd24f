use crate::error::KdTreeError;
use rand::Rng;

/// Generic axis-aligned bounding box for N-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Builds a box from a runtime list of `(min, max)` pairs, one per axis.
    ///
    /// Fails if the list does not have exactly `D` entries, or if any entry is
    /// inverted or non-finite.
    pub fn from_ranges(ranges: &[(f64, f64)]) -> Result<Self, KdTreeError> {
        if ranges.len() != D {
            return Err(KdTreeError::DimensionMismatch { expected: D, got: ranges.len() });
        }

        let mut min = [0.0; D];
        let mut max = [0.0; D];
        for (axis, &(lo, hi)) in ranges.iter().enumerate() {
            min[axis] = lo;
            max[axis] = hi;
        }
        Self::new(min, max).validated()
    }

    /// Checks that every axis is finite, not inverted, and has a width that
    /// fits in an `f64`.
    pub fn validated(self) -> Result<Self, KdTreeError> {
        for axis in 0..D {
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if !lo.is_finite() || !hi.is_finite() || lo > hi || !(hi - lo).is_finite() {
                return Err(KdTreeError::InvalidRange { axis, min: lo, max: hi });
            }
        }
        Ok(self)
    }

    /// Inclusive on both ends.
    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Halves before adding so large same-sign bounds cannot overflow.
    pub fn mid_point(&self, axis: usize) -> f64 {
        self.min[axis] * 0.5 + self.max[axis] * 0.5
    }

    /// Cuts the box in two along `axis` at `at`, returning `(lower, upper)`.
    pub fn split(&self, axis: usize, at: f64) -> (Self, Self) {
        let mut lower_max = self.max;
        lower_max[axis] = at;

        let mut upper_min = self.min;
        upper_min[axis] = at;

        (Self::new(self.min, lower_max), Self::new(upper_min, self.max))
    }

    /// Draws a point uniformly from the box, one independent draw per axis.
    pub fn sample_uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; D] {
        let mut point = [0.0; D];
        for i in 0..D {
            let (lo, hi) = (self.min[i], self.max[i]);
            // gen_range panics on an empty range, a flat axis has only one value anyway
            point[i] = if lo < hi { rng.gen_range(lo..=hi) } else { lo };
        }
        point
    }

    pub fn volume(&self) -> f64 {
        (0..D).map(|i| self.max[i] - self.min[i]).product()
    }
}
