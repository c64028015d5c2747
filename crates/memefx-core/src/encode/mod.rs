//! Image encoding for effect output.
//!
//! Every effect result leaves the engine as JPEG. Deep-fry leans on this:
//! its very low quality setting is part of the look.

mod jpeg;

pub use jpeg::{encode_jpeg, encode_jpeg_pixels, EncodeError};
