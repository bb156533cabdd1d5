//! Sample depth conversion module
//!
//! Stateless helpers for changing the sample precision of a decoded frame,
//! used when handing frames to a rendering surface.

mod converter;
pub mod types;

pub use converter::convert_depth;
pub use types::{ConvertedFrame, SampleDepth, SamplePlane};
