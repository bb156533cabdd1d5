use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::frame_pipeline::{
    codec::{FrameDecoder, UltraDecoder, UltraHeader},
    common::error::{FrameError, Result},
    filters::{FilterPipeline, ProcessingParams},
    render::{RenderSink, TiffSink},
};

/// Decodes an `.ultra` frame, applies the configured filters, and writes
/// the processed matrix to a render sink.
///
/// The pipeline itself is stateless between calls; holding one value and
/// sharing it across threads is safe because every `process` call works on
/// freshly allocated buffers.
pub struct UltraToTiffPipeline<D: FrameDecoder, S: RenderSink> {
    decoder: D,
    sink: S,
    params: ProcessingParams,
}

impl UltraToTiffPipeline<UltraDecoder, TiffSink> {
    pub fn new(params: ProcessingParams) -> Self {
        Self {
            decoder: UltraDecoder,
            sink: TiffSink::default(),
            params,
        }
    }
}

impl<D: FrameDecoder, S: RenderSink> UltraToTiffPipeline<D, S> {
    pub fn with_custom(decoder: D, sink: S, params: ProcessingParams) -> Self {
        Self {
            decoder,
            sink,
            params,
        }
    }

    /// Processes one frame from raw bytes into the sink.
    ///
    /// Returns the decoded header so callers can surface frame metadata.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn process(&self, input_data: &[u8], output: &mut dyn Write) -> Result<UltraHeader> {
        info!("Starting frame processing");

        let decoded = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.decoder.decode_frame(input_data)?
        };

        let processed = {
            let _span = tracing::info_span!(
                "apply_filters",
                width = decoded.frame.width,
                height = decoded.frame.height
            )
            .entered();
            FilterPipeline::new(self.params.clone()).apply(&decoded.frame)?
        };

        {
            let _span = tracing::info_span!("write_frame").entered();
            self.sink.write_frame(&processed, output)?;
        }

        info!(
            frame = decoded.header.frame_number,
            width = processed.width,
            height = processed.height,
            "Frame processing complete"
        );
        Ok(decoded.header)
    }

    /// Processes one frame from a file path into a file path.
    #[instrument(skip(self, input_path, output_path))]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<UltraHeader> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Processing frame file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                FrameError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                FrameError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.process(&input_data, &mut output_file)
    }

    pub fn params(&self) -> &ProcessingParams {
        &self.params
    }

    pub fn set_params(&mut self, params: ProcessingParams) {
        self.params = params;
    }
}
