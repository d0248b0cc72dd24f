//! WebAssembly bindings.
//!
//! One class per supported dimensionality, each owning its tree together with
//! the random generator used for sampling.

pub mod d2;
pub mod d3;
pub mod utils;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}
