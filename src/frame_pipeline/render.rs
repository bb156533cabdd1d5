//! Render sink module
//!
//! The seam between the core pipeline and whatever surface displays or
//! stores the processed frame. The bundled sink encodes grayscale TIFF;
//! host integrations provide their own implementations.

mod sink;
mod tiff_sink;

pub use sink::RenderSink;
pub use tiff_sink::TiffSink;
