//! Fixed-order filter pipeline.

use tracing::{debug, warn};

use crate::frame_pipeline::codec::types::FrameBuffer;
use crate::frame_pipeline::common::error::{FrameError, Result};
use crate::frame_pipeline::filters::kernels;
use crate::frame_pipeline::filters::types::{FilterStage, ProcessingParams};

/// Fixed NLM parameters: filter strength, template window, search window.
const DENOISE_STRENGTH: f32 = 10.0;
const DENOISE_TEMPLATE_WINDOW: usize = 7;
const DENOISE_SEARCH_WINDOW: usize = 21;

/// Applies the configured stage plan to decoded frames.
///
/// Stateless between invocations; every call allocates a fresh output
/// buffer, so concurrent use from multiple threads is safe.
pub struct FilterPipeline {
    params: ProcessingParams,
}

impl FilterPipeline {
    pub fn new(params: ProcessingParams) -> Self {
        Self { params }
    }

    /// Runs the enabled stages in fixed order, then the terminal
    /// clamp/rescale that guarantees an 8-bit result in [0,255].
    ///
    /// # Returns
    ///
    /// * `Ok(FrameBuffer)` - processed matrix with the input's dimensions
    /// * `Err(FrameError::EmptyFrame)` - the input has no samples
    pub fn apply(&self, frame: &FrameBuffer) -> Result<FrameBuffer> {
        if frame.is_empty() {
            return Err(FrameError::EmptyFrame);
        }

        if self.params.enable_ai_preprocessing {
            warn!("AI preprocessing requested but no implementation is available; skipping");
        }
        if self.params.gaussian_blur && !self.params.blur_kernel_valid() {
            warn!(
                kernel = self.params.blur_kernel_size,
                "Blur kernel size must be odd and positive; skipping blur stage"
            );
        }

        let plan = self.params.stage_plan();
        debug!(
            stages = plan.len(),
            width = frame.width,
            height = frame.height,
            "Applying filter stages"
        );

        let mut data = frame.data.clone();
        for stage in &plan {
            let _span = tracing::info_span!("filter_stage", stage = stage.name()).entered();
            data = match *stage {
                FilterStage::Normalize => kernels::min_max_rescale(&data),
                FilterStage::Gain(gain) => kernels::affine(&data, gain, 0.0),
                FilterStage::Denoise => kernels::nlm_denoise(
                    &data,
                    frame.width,
                    frame.height,
                    DENOISE_STRENGTH,
                    DENOISE_TEMPLATE_WINDOW,
                    DENOISE_SEARCH_WINDOW,
                ),
                FilterStage::Blur(ksize) => {
                    kernels::gaussian_blur(&data, frame.width, frame.height, ksize)
                }
                FilterStage::Sharpen(amount) => {
                    kernels::unsharp_mask(&data, frame.width, frame.height, amount)
                }
                FilterStage::Contrast { alpha, beta } => {
                    kernels::affine(&data, alpha, beta as f32)
                }
            };
        }

        // Terminal range guarantee, independent of which stages ran.
        let data = {
            let _span = tracing::info_span!("filter_stage", stage = "final_rescale").entered();
            kernels::min_max_rescale(&data)
        };

        Ok(FrameBuffer::new(frame.width, frame.height, data))
    }

    pub fn params(&self) -> &ProcessingParams {
        &self.params
    }

    pub fn set_params(&mut self, params: ProcessingParams) {
        self.params = params;
    }
}

/// Convenience form of [`FilterPipeline::apply`] for one-shot callers.
pub fn apply_filters(frame: &FrameBuffer, params: &ProcessingParams) -> Result<FrameBuffer> {
    FilterPipeline::new(params.clone()).apply(frame)
}
