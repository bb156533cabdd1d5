//! Value-preserving sample depth casts.

use crate::frame_pipeline::codec::types::FrameBuffer;
use crate::frame_pipeline::convert::types::{ConvertedFrame, SampleDepth, SamplePlane};

/// Re-expresses an 8-bit frame at the requested sample precision.
///
/// The cast preserves sample values (128u8 becomes 128u16 / 128.0f32); it
/// does not stretch them to the wider range. Pure and infallible: every
/// representable target is supported.
pub fn convert_depth(frame: &FrameBuffer, target: SampleDepth) -> ConvertedFrame {
    let samples = match target {
        SampleDepth::U8 => SamplePlane::U8(frame.data.clone()),
        SampleDepth::U16 => SamplePlane::U16(frame.data.iter().map(|&v| v as u16).collect()),
        SampleDepth::F32 => SamplePlane::F32(frame.data.iter().map(|&v| v as f32).collect()),
    };

    ConvertedFrame {
        width: frame.width,
        height: frame.height,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FrameBuffer {
        FrameBuffer::new(2, 2, vec![0, 64, 128, 255])
    }

    #[test]
    fn test_identity_copy() {
        let out = convert_depth(&frame(), SampleDepth::U8);
        assert_eq!(out.width, 2);
        assert_eq!(out.height, 2);
        assert_eq!(out.samples, SamplePlane::U8(vec![0, 64, 128, 255]));
    }

    #[test]
    fn test_widening_preserves_values() {
        let out = convert_depth(&frame(), SampleDepth::U16);
        assert_eq!(out.samples, SamplePlane::U16(vec![0, 64, 128, 255]));
    }

    #[test]
    fn test_float_cast_preserves_values() {
        let out = convert_depth(&frame(), SampleDepth::F32);
        assert_eq!(out.samples, SamplePlane::F32(vec![0.0, 64.0, 128.0, 255.0]));
    }

    #[test]
    fn test_empty_frame_converts() {
        let empty = FrameBuffer::new(0, 0, Vec::new());
        let out = convert_depth(&empty, SampleDepth::U16);
        assert!(out.samples.is_empty());
    }
}
