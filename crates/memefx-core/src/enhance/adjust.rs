//! Enhancement blends.
//!
//! Each adjustment builds a *degenerate* image and extrapolates away from
//! it: `out = degenerate + factor * (img - degenerate)`, rounded and
//! clamped per channel. A factor of `1.0` returns the input, `0.0` returns
//! the degenerate image, and larger factors exaggerate the difference.
//!
//! | Adjustment | Degenerate image |
//! |------------|------------------|
//! | color      | per-pixel luma gray |
//! | contrast   | solid gray at the mean luma |
//! | brightness | black |
//! | sharpness  | 3x3 smoothed copy, borders untouched |

use crate::raster::Raster;

/// ITU-R 601 luma of one pixel, rounded to the nearest integer.
#[inline]
pub fn luma(px: &[u8]) -> u8 {
    let weighted = 299 * px[0] as u32 + 587 * px[1] as u32 + 114 * px[2] as u32;
    ((weighted + 500) / 1000) as u8
}

#[inline]
fn mix(degenerate: u8, value: u8, factor: f32) -> u8 {
    let d = degenerate as f32;
    (d + factor * (value as f32 - d)).round().clamp(0.0, 255.0) as u8
}

/// Blend every channel against the matching degenerate channel.
fn blend(pixels: &mut [u8], degenerate: &[u8], factor: f32) {
    for (value, &d) in pixels.iter_mut().zip(degenerate) {
        *value = mix(d, *value, factor);
    }
}

/// Scale color saturation.
pub fn enhance_color(raster: &mut Raster, factor: f32) {
    for px in raster.pixels.chunks_exact_mut(3) {
        let gray = luma(px);
        for channel in px.iter_mut() {
            *channel = mix(gray, *channel, factor);
        }
    }
}

/// Scale contrast around the image's mean luma.
pub fn enhance_contrast(raster: &mut Raster, factor: f32) {
    let count = raster.pixel_count();
    if count == 0 {
        return;
    }
    let total: u64 = raster.pixels.chunks_exact(3).map(|px| luma(px) as u64).sum();
    let mean = ((total as f64 / count as f64).round()) as u8;

    for channel in raster.pixels.iter_mut() {
        *channel = mix(mean, *channel, factor);
    }
}

/// Scale brightness; black is the fixed point.
pub fn enhance_brightness(raster: &mut Raster, factor: f32) {
    for channel in raster.pixels.iter_mut() {
        *channel = mix(0, *channel, factor);
    }
}

/// Scale sharpness against a smoothed copy of the image.
pub fn enhance_sharpness(raster: &mut Raster, factor: f32) {
    let smoothed = smooth(raster);
    blend(&mut raster.pixels, &smoothed, factor);
}

/// 3x3 smoothing with weights `[[1,1,1],[1,5,1],[1,1,1]] / 13`.
///
/// The outermost ring of pixels is copied from the source unchanged.
fn smooth(raster: &Raster) -> Vec<u8> {
    let mut out = raster.pixels.clone();
    let (width, height) = (raster.width as usize, raster.height as usize);
    if width < 3 || height < 3 {
        return out;
    }

    let stride = width * 3;
    let src = &raster.pixels;
    for row in 1..height - 1 {
        for col in 1..width - 1 {
            for ch in 0..3 {
                let mut sum = 0u32;
                for dr in [row - 1, row, row + 1] {
                    for dc in [col - 1, col, col + 1] {
                        sum += src[dr * stride + dc * 3 + ch] as u32;
                    }
                }
                let center = src[row * stride + col * 3 + ch] as u32;
                // Center weight is 5: one from the loop, four extra here.
                sum += center * 4;
                out[row * stride + col * 3 + ch] = ((sum + 6) / 13) as u8;
            }
        }
    }
    out
}
