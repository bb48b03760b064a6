use tiffwrite::logger;
use tiffwrite::writer::{ImageData, TiffWriter};

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    info!("Starting tiffwrite...");

    let width = 512;
    let height = 512;
    let data = (0..width * height)
        .map(|i| ((i % width) * 255 / (width - 1)) as u8)
        .collect();
    let image = ImageData {
        width,
        height,
        data,
    };

    let mut writer = TiffWriter::new(image);
    writer.configure([
        ("compression", "lzw"),
        ("predictor", "horizontal_differencing"),
        ("resolution_units", "inch"),
        ("resolution", "300x300"),
    ])?;

    info!(
        "Directive: {}",
        writer.options().to_directive("output.tif")
    );

    match writer.write("output.tif") {
        Ok(()) => info!("Write successful!"),
        Err(e) => error!("Write failed: {}", e),
    }

    Ok(())
}
