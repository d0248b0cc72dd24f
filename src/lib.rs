//! # kdsampler
//!
//! `kdsampler` is a Rust library for value-weighted sampling over a bounded, fixed-dimensional
//! region, designed to be used in Rust as well as compiled to WebAssembly (WASM). It keeps a
//! lazily split k-d tree of observed points and their scores, and draws new points biased
//! towards the regions that scored best so far.
//!
//! ## Features
//!
//! - **Incremental**: Points are inserted one at a time, a region is only bisected once it holds
//!   a second point.
//! - **Value-weighted sampling**: At every split the sampler descends left or right in proportion
//!   to the mean value observed on each side, then draws uniformly inside the chosen region.
//! - **Reproducible**: Randomness is always injected, batches drawn in parallel with `rayon` only
//!   depend on the seed.
//! - **WASM-first**: 2D and 3D trees are exported with `wasm-bindgen` for use from JavaScript and
//!   TypeScript.
//!
//! ## Example
//!
//! ```
//! use kdsampler::{BoundingBox, KdTree};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut tree = KdTree::new(BoundingBox::new([0.0, 0.0], [10.0, 10.0]));
//! tree.add([3.0, 3.0], 1.0);
//! tree.add([7.0, 7.0], 4.0);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let p = tree.sample(&mut rng);
//! assert!(tree.bounds().contains(&p));
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`KdTree`] struct, which owns the bounds, the root
//! [`KdNode`] and the [`TreeStats`].

mod bounds;
mod error;
mod node;
mod sampler;
mod tree;
pub mod wasm;

pub use bounds::BoundingBox;
pub use error::KdTreeError;
pub use error::Result;
pub use node::KdNode;
pub use node::TreeStats;
pub use sampler::Samples;
pub use tree::KdTree;
