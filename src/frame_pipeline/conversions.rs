//! Pipeline orchestration module
//!
//! This module ties frame decoding, filter application, and render-sink
//! output together behind one entry point.

mod ultra_to_tiff;

pub use ultra_to_tiff::UltraToTiffPipeline;
