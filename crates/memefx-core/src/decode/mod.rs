//! Image decoding pipeline for memefx.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG images into a [`Raster`](crate::raster::Raster)
//! - Applying EXIF orientation so phone photos come out upright
//! - Bounding images to a working resolution before an effect runs
//!
//! All operations are synchronous and single-threaded.

mod reader;
mod resize;
mod types;

pub use reader::{decode_file, decode_image};
pub use resize::{resize, resize_to_fit};
pub use types::{DecodeError, ResizeError};
