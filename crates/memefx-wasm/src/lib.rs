//! memefx WASM - WebAssembly bindings for memefx
//!
//! This crate exposes the memefx-core effects to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `raster` - `JsRaster` wrapper plus decode/encode bindings
//! - `effects` - one binding per effect, bytes in and JPEG bytes out
//!
//! # Usage
//!
//! ```typescript
//! import init, { liquid_resize } from '@memefx/wasm';
//!
//! await init();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const squished = liquid_resize(bytes, 0.5);
//! ```

use wasm_bindgen::prelude::*;

mod effects;
mod raster;

pub use effects::{bulge, crispy, deep_fry, liquid_resize, pinch, swirl};
pub use raster::{decode_image, encode_jpeg, JsRaster};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
