use std::io::Write;

use tracing::debug;

use crate::frame_pipeline::codec::types::FrameBuffer;
use crate::frame_pipeline::common::error::{FrameError, Result};
use crate::frame_pipeline::convert::{SampleDepth, SamplePlane, convert_depth};
use crate::frame_pipeline::render::sink::RenderSink;

/// Render sink that encodes frames as single-channel TIFF.
///
/// The sink converts to its configured sample depth first, so 8-bit frames
/// can be exported as Gray8, Gray16, or Gray32Float surfaces.
pub struct TiffSink {
    depth: SampleDepth,
}

impl TiffSink {
    pub fn new(depth: SampleDepth) -> Self {
        Self { depth }
    }
}

impl Default for TiffSink {
    fn default() -> Self {
        Self::new(SampleDepth::U8)
    }
}

impl RenderSink for TiffSink {
    fn write_frame(&self, frame: &FrameBuffer, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding TIFF image: {}x{}, {:?}",
            frame.width, frame.height, self.depth
        );

        let converted = convert_depth(frame, self.depth);

        let mut buffer = Vec::new();
        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| FrameError::EncodeError(e.to_string()))?;

        let width = frame.width as u32;
        let height = frame.height as u32;
        match &converted.samples {
            SamplePlane::U8(data) => encoder
                .write_image::<tiff::encoder::colortype::Gray8>(width, height, data)
                .map_err(|e| FrameError::EncodeError(e.to_string()))?,
            SamplePlane::U16(data) => encoder
                .write_image::<tiff::encoder::colortype::Gray16>(width, height, data)
                .map_err(|e| FrameError::EncodeError(e.to_string()))?,
            SamplePlane::F32(data) => encoder
                .write_image::<tiff::encoder::colortype::Gray32Float>(width, height, data)
                .map_err(|e| FrameError::EncodeError(e.to_string()))?,
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FrameBuffer {
        FrameBuffer::new(4, 4, (0..16).map(|i| (i * 16) as u8).collect())
    }

    #[test]
    fn test_writes_little_endian_tiff() {
        let mut out = Vec::new();
        TiffSink::default().write_frame(&frame(), &mut out).unwrap();

        assert!(!out.is_empty());
        // "II" byte order mark + 42
        assert_eq!(&out[0..4], &[0x49, 0x49, 42, 0]);
    }

    #[test]
    fn test_wide_depths_encode() {
        for depth in [SampleDepth::U16, SampleDepth::F32] {
            let mut out = Vec::new();
            TiffSink::new(depth).write_frame(&frame(), &mut out).unwrap();
            assert!(!out.is_empty());
        }
    }
}
