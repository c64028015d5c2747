//! Raster wrapper and codec bindings.

use memefx_core::{decode, encode, Raster};
use wasm_bindgen::prelude::*;

/// A decoded RGB image held in WASM memory.
///
/// `pixels()` copies the buffer out to a `Uint8Array`; keep the raster on
/// the WASM side when chaining operations.
#[wasm_bindgen]
pub struct JsRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRaster {
    /// Wrap existing RGB data (3 bytes per pixel, row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Copy of the RGB pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsRaster {
    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self {
            width: raster.width,
            height: raster.height,
            pixels: raster.pixels,
        }
    }

    pub(crate) fn to_raster(&self) -> Result<Raster, String> {
        let expected = self.width as usize * self.height as usize * 3;
        if self.pixels.len() != expected {
            return Err(format!(
                "Pixel buffer has {} bytes, expected {} for {}x{}",
                self.pixels.len(),
                expected,
                self.width,
                self.height
            ));
        }
        Ok(Raster::new(self.width, self.height, self.pixels.clone()))
    }
}

/// Decode JPEG or PNG bytes, applying EXIF orientation.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_image(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster as JPEG. Quality is clamped to 1-100.
#[wasm_bindgen]
pub fn encode_jpeg(raster: &JsRaster, quality: u8) -> Result<Vec<u8>, JsValue> {
    let core = raster.to_raster().map_err(|e| JsValue::from_str(&e))?;
    encode::encode_jpeg(&core, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_core() {
        let raster = JsRaster::new(4, 2, vec![10u8; 4 * 2 * 3]);
        let core = raster.to_raster().unwrap();
        assert_eq!((core.width, core.height), (4, 2));

        let back = JsRaster::from_raster(core);
        assert_eq!(back.pixels(), vec![10u8; 24]);
        assert_eq!(back.byte_length(), 24);
    }

    #[test]
    fn test_mismatched_buffer_is_rejected() {
        let raster = JsRaster::new(4, 4, vec![0u8; 10]);
        assert!(raster.to_raster().is_err());
    }

    #[test]
    fn test_encode_pixels_is_jpeg() {
        let raster = JsRaster::new(8, 8, vec![128u8; 8 * 8 * 3]);
        let jpeg = encode::encode_jpeg_pixels(&raster.pixels(), raster.width(), raster.height(), 90)
            .unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
