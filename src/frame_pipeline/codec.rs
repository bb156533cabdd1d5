//! Frame codec module
//!
//! This module parses and validates the fixed-layout `.ultra` binary frame
//! format: a 32-byte little-endian header followed by a single-channel
//! intensity payload.

pub mod checksum;
mod decoder;
pub mod header;
pub mod types;
mod ultra_decoder;

pub use decoder::FrameDecoder;
pub use header::UltraHeader;
pub use types::{FrameBuffer, UltraFrame};
pub use ultra_decoder::{UltraDecoder, encode_frame};
