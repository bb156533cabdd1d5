//! Ultrasound frame processing pipeline module
//!
//! This module provides a structured approach to `.ultra` frame handling,
//! with separate modules for frame decoding, filter application, sample
//! depth conversion, and render-sink orchestration.

pub mod codec;
pub mod common;
pub mod conversions;
pub mod convert;
pub mod filters;
pub mod render;

pub use common::{
    FrameError,
    Result,
};

pub use codec::{
    FrameBuffer,
    FrameDecoder,
    UltraDecoder,
    UltraFrame,
    UltraHeader,
};

pub use filters::{
    FilterPipeline,
    FilterStage,
    ProcessingParams,
    ProcessingParamsBuilder,
};

pub use convert::{
    ConvertedFrame,
    SampleDepth,
    SamplePlane,
};

pub use render::{
    RenderSink,
    TiffSink,
};

pub use conversions::{
    UltraToTiffPipeline,
};
