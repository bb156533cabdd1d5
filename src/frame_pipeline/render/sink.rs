use std::io::Write;

use crate::frame_pipeline::codec::types::FrameBuffer;
use crate::frame_pipeline::common::error::Result;

pub trait RenderSink {
    fn write_frame(&self, frame: &FrameBuffer, output: &mut dyn Write) -> Result<()>;
}
