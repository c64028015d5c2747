//! memefx Core - image effects engine
//!
//! This crate provides the pixel-level effects behind memefx:
//! content-aware "liquid" resizing by seam carving, radial distortions
//! (swirl, bulge, pinch) and the deep-fry and crispy enhancement
//! pipelines, plus the decode/encode plumbing around them.
//!
//! The usual entry point is [`process_bytes`] or [`process_file`];
//! long-running work can be pushed onto an [`EffectWorker`].

pub mod config;
pub mod decode;
pub mod distort;
pub mod effects;
pub mod encode;
pub mod enhance;
pub mod raster;
pub mod seam;
pub mod worker;

pub use config::{
    ConfigError, CrispyConfig, DeepFryConfig, EffectsConfig, LensConfig, LiquidConfig, SwirlConfig,
};
pub use decode::{decode_file, decode_image, DecodeError, ResizeError};
pub use effects::{
    apply_effect, apply_effect_with_rng, process_bytes, process_bytes_with_rng, process_file,
    unique_output_path, Effect, EffectError,
};
pub use encode::{encode_jpeg, EncodeError};
pub use raster::Raster;
pub use seam::{liquid_resize, CarveError, Seam};
pub use worker::{EffectJob, EffectWorker, JobHandle, JobInput, JobOutput, WorkerError};
