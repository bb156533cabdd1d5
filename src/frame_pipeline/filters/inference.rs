//! Reserved hook for future on-device model inference.

use tracing::debug;

use crate::frame_pipeline::codec::types::FrameBuffer;
use crate::frame_pipeline::common::error::{FrameError, Result};

/// Placeholder for the AI preprocessing hook.
///
/// Always fails with [`FrameError::NotImplemented`]; it must never pass the
/// frame through unmodified, so callers cannot mistake the stub for a real
/// inference pass. A future implementation replaces this failure entirely.
pub fn run_ai_inference(_frame: &FrameBuffer, model_path: &str) -> Result<FrameBuffer> {
    debug!(model = model_path, "AI inference requested");
    Err(FrameError::NotImplemented("AI inference".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_fails() {
        let frame = FrameBuffer::new(4, 4, vec![0u8; 16]);
        let result = run_ai_inference(&frame, "model.tflite");
        assert!(matches!(result, Err(FrameError::NotImplemented(_))));
    }
}
