//! Effect bindings.
//!
//! Every function takes encoded image bytes and returns JPEG bytes. The
//! trailing `config` argument is optional: pass a partial object such as
//! `{ swirl: { strength: 8.0 } }` to override defaults, or omit it.
//!
//! ```typescript
//! import { swirl, deep_fry } from '@memefx/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const twisted = swirl(bytes);
//! const fried = deep_fry(bytes, 42, { deep_fry: { quality: 5 } });
//! ```

use memefx_core::{process_bytes, process_bytes_with_rng, Effect, EffectsConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

fn parse_config(value: JsValue) -> Result<EffectsConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EffectsConfig::default());
    }
    let config: EffectsConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid effects config: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

/// Run an effect without touching `JsValue`, so it is testable natively.
pub(crate) fn run(
    bytes: &[u8],
    effect: Effect,
    config: &EffectsConfig,
    seed: Option<u64>,
) -> Result<Vec<u8>, String> {
    let result = match seed {
        Some(seed) => {
            process_bytes_with_rng(bytes, effect, config, &mut StdRng::seed_from_u64(seed))
        }
        None => process_bytes(bytes, effect, config),
    };
    result.map_err(|e| e.to_string())
}

fn run_js(
    bytes: &[u8],
    effect: Effect,
    config: JsValue,
    seed: Option<u64>,
) -> Result<Vec<u8>, JsValue> {
    let config = parse_config(config)?;
    run(bytes, effect, &config, seed).map_err(|e| JsValue::from_str(&e))
}

/// Seam-carving shrink by `scale` on both axes, `0 < scale <= 1`.
#[wasm_bindgen]
pub fn liquid_resize(bytes: &[u8], scale: f64, config: JsValue) -> Result<Vec<u8>, JsValue> {
    run_js(
        bytes,
        Effect::LiquidResize { scale: Some(scale) },
        config,
        None,
    )
}

#[wasm_bindgen]
pub fn swirl(bytes: &[u8], config: JsValue) -> Result<Vec<u8>, JsValue> {
    run_js(bytes, Effect::Swirl, config, None)
}

#[wasm_bindgen]
pub fn bulge(bytes: &[u8], config: JsValue) -> Result<Vec<u8>, JsValue> {
    run_js(bytes, Effect::Bulge, config, None)
}

#[wasm_bindgen]
pub fn pinch(bytes: &[u8], config: JsValue) -> Result<Vec<u8>, JsValue> {
    run_js(bytes, Effect::Pinch, config, None)
}

/// Deep-fry with noise drawn from a generator seeded by `seed`.
#[wasm_bindgen]
pub fn deep_fry(bytes: &[u8], seed: u32, config: JsValue) -> Result<Vec<u8>, JsValue> {
    run_js(bytes, Effect::DeepFry, config, Some(seed as u64))
}

#[wasm_bindgen]
pub fn crispy(bytes: &[u8], config: JsValue) -> Result<Vec<u8>, JsValue> {
    run_js(bytes, Effect::Crispy, config, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memefx_core::{encode_jpeg, Raster};

    fn jpeg(width: u32, height: u32) -> Vec<u8> {
        let mut raster = Raster::filled(width, height, [0, 0, 0]);
        for row in 0..height as usize {
            for col in 0..width as usize {
                raster.set_pixel(row, col, [(col * 8) as u8, (row * 8) as u8, 128]);
            }
        }
        encode_jpeg(&raster, 95).unwrap()
    }

    #[test]
    fn test_seeded_deep_fry_is_reproducible() {
        let input = jpeg(24, 24);
        let config = EffectsConfig::default();

        let a = run(&input, Effect::DeepFry, &config, Some(7)).unwrap();
        let b = run(&input, Effect::DeepFry, &config, Some(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_effect_returns_jpeg() {
        let input = jpeg(20, 16);
        let config = EffectsConfig::default();
        for effect in [
            Effect::LiquidResize { scale: Some(0.5) },
            Effect::Swirl,
            Effect::Bulge,
            Effect::Pinch,
            Effect::DeepFry,
            Effect::Crispy,
        ] {
            let out = run(&input, effect, &config, Some(1)).unwrap();
            assert_eq!(&out[0..2], &[0xFF, 0xD8], "{}", effect);
        }
    }

    #[test]
    fn test_error_is_message() {
        let err = run(b"nope", Effect::Swirl, &EffectsConfig::default(), None).unwrap_err();
        assert!(err.starts_with("Corrupted or unsupported image file"));
    }
}
