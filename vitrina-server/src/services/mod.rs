//! Background services

pub mod image_cleanup;

pub use image_cleanup::{CleanupReport, ImageCleanupService};
