use ultrascan_rs::frame_pipeline::{ProcessingParams, UltraToTiffPipeline};
use ultrascan_rs::logger;

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    info!("Starting ultrascan (SDK {})...", ultrascan_rs::version());

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "frame_0000.ultra".to_string());
    let output = args.next().unwrap_or_else(|| "frame_0000.tiff".to_string());

    let params = ProcessingParams::builder()
        .normalize(true)
        .denoise(true)
        .gain(1.0)
        .build();
    let pipeline = UltraToTiffPipeline::new(params);

    info!("Frame pipeline initialized");
    info!(
        "Denoising: {}",
        if pipeline.params().denoise {
            "enabled"
        } else {
            "disabled"
        }
    );

    match pipeline.process_file(&input, &output) {
        Ok(header) => info!(
            "Processed frame {} ({}x{})",
            header.frame_number, header.width, header.height
        ),
        Err(e) => error!("Frame processing failed: {}", e),
    }

    Ok(())
}
