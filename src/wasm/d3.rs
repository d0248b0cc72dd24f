use crate::bounds::BoundingBox;
use crate::tree::KdTree;
use crate::wasm::utils::{flatten, get_seed, parse_js_point};
use rand::prelude::*;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

// --- Bounding Box ---

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox3D {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

#[wasm_bindgen]
impl BoundingBox3D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> BoundingBox3D {
        BoundingBox3D { min_x, min_y, min_z, max_x, max_y, max_z }
    }
}

impl From<BoundingBox3D> for BoundingBox<3> {
    fn from(b: BoundingBox3D) -> Self {
        Self { min: [b.min_x, b.min_y, b.min_z], max: [b.max_x, b.max_y, b.max_z] }
    }
}

// --- Tree ---

#[wasm_bindgen(js_name = KdTree3D)]
pub struct KdTree3D {
    inner: KdTree<3>,
    rng: StdRng,
}

#[wasm_bindgen(js_class = KdTree3D)]
impl KdTree3D {
    #[wasm_bindgen(constructor)]
    pub fn new(bounds: BoundingBox3D) -> Result<KdTree3D, JsError> {
        KdTree3D::with_seed(bounds, get_seed())
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(bounds: BoundingBox3D, seed: u64) -> Result<KdTree3D, JsError> {
        let b = BoundingBox::<3>::from(bounds).validated()?;
        Ok(KdTree3D { inner: KdTree::new(b), rng: StdRng::seed_from_u64(seed) })
    }

    pub fn add(&mut self, x: f64, y: f64, z: f64, value: f64) -> Result<(), JsError> {
        self.inner.try_add(&[x, y, z], value)?;
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
