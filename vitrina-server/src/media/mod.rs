//! Media processing
//!
//! Image crop pipeline used by the upload endpoint.

pub mod crop;

pub use crop::{CropError, CropRect, crop_to_jpeg};
