use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Reads a JS array of numbers into coordinates.
///
/// Length is not checked here, the tree rejects points of the wrong size.
pub fn parse_js_point(val: &JsValue) -> Result<Vec<f64>, JsError> {
    let arr = val
        .dyn_ref::<Array>()
        .ok_or_else(|| JsError::new("point must be an array of numbers"))?;

    let mut point = Vec::with_capacity(arr.length() as usize);
    for i in 0..arr.length() {
        let coord = arr
            .get(i)
            .as_f64()
            .ok_or_else(|| JsError::new(&format!("point coordinate {} is not a number", i)))?;
        point.push(coord);
    }
    Ok(point)
}

pub fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}

/// Flattens points into one coordinate buffer for transfer to JS.
pub fn flatten<const D: usize>(points: &[[f64; D]]) -> Vec<f64> {
    points.iter().flat_map(|p| p.iter().copied()).collect()
}
