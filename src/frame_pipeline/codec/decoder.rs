use crate::frame_pipeline::codec::types::UltraFrame;
use crate::frame_pipeline::common::error::Result;

pub trait FrameDecoder {
    fn decode_frame(&self, data: &[u8]) -> Result<UltraFrame>;
}
