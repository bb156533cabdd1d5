//! Decoder and enhancement pipeline for `.ultra` ultrasound frame files.
//!
//! An `.ultra` frame is a fixed 32-byte little-endian header followed by a
//! single-channel 8-bit intensity payload. This crate parses and validates
//! that layout, applies a configurable fixed-order sequence of image
//! filters, and hands the result to a render sink.

pub mod frame_pipeline;
pub mod logger;

/// SDK version reported to host integrations.
pub const SDK_VERSION: &str = "1.0.0";

/// Returns the static SDK version string.
pub fn version() -> &'static str {
    SDK_VERSION
}
