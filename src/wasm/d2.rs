use crate::bounds::BoundingBox;
use crate::tree::KdTree;
use crate::wasm::utils::{flatten, get_seed, parse_js_point};
use rand::prelude::*;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

// --- Bounding Box ---

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[wasm_bindgen]
impl BoundingBox2D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox2D {
        BoundingBox2D { min_x, min_y, max_x, max_y }
    }
}

impl From<BoundingBox2D> for BoundingBox<2> {
    fn from(b: BoundingBox2D) -> Self {
        Self { min: [b.min_x, b.min_y], max: [b.max_x, b.max_y] }
    }
}

// --- Tree ---

#[wasm_bindgen(js_name = KdTree2D)]
pub struct KdTree2D {
    inner: KdTree<2>,
    rng: StdRng,
}

#[wasm_bindgen(js_class = KdTree2D)]
impl KdTree2D {
    #[wasm_bindgen(constructor)]
    pub fn new(bounds: BoundingBox2D) -> Result<KdTree2D, JsError> {
        KdTree2D::with_seed(bounds, get_seed())
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(bounds: BoundingBox2D, seed: u64) -> Result<KdTree2D, JsError> {
        let b = BoundingBox::<2>::from(bounds).validated()?;
        Ok(KdTree2D { inner: KdTree::new(b), rng: StdRng::seed_from_u64(seed) })
    }

    pub fn add(&mut self, x: f64, y: f64, value: f64) -> Result<(), JsError> {
        self.inner.try_add(&[x, y], value)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = addPoint)]
    pub fn add_point(&mut self, point: JsValue, value: f64) -> Result<(), JsError> {
        let coords = parse_js_point(&point)?;
        self.inner.try_add(&coords, value)?;
        Ok(())
    }

    pub fn sample(&mut self) -> Vec<f64> {
        self.inner.sample(&mut self.rng).to_vec()
    }

    /// Draws `count` points in parallel, flattened. The batch seed is drawn
    /// from the tree's generator, so repeated calls give fresh batches.
    #[wasm_bindgen(js_name = sampleMany)]
    pub fn sample_many(&mut self, count: usize) -> Vec<f64> {
        let seed = self.rng.r#gen();
        flatten(&self.inner.sample_many(count, seed))
    }

    #[wasm_bindgen(getter, js_name = maxDepth)]
    pub fn max_depth(&self) -> usize { self.inner.max_depth() }
    #[wasm_bindgen(getter, js_name = nodeCount)]
    pub fn node_count(&self) -> usize { self.inner.node_count() }
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize { self.inner.len() }
    #[wasm_bindgen(getter, js_name = expectedValue)]
    pub fn expected_value(&self) -> Option<f64> { self.inner.root().expected_value() }
}
