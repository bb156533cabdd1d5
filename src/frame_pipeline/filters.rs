//! Filter pipeline module
//!
//! This module applies a fixed-order sequence of intensity transforms to a
//! decoded frame, driven by a [`ProcessingParams`] record.

pub mod kernels;
mod inference;
mod pipeline;
pub mod types;

pub use inference::run_ai_inference;
pub use pipeline::{FilterPipeline, apply_filters};
pub use types::{FilterStage, ProcessingParams, ProcessingParamsBuilder};
