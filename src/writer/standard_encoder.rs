use std::fs::File;

use tracing::debug;

use crate::writer::encoder::DirectiveEncoder;
use crate::writer::error::{Result, WriteError};
use crate::writer::types::ImageData;

/// Encoder backed by the `tiff` crate.
///
/// Parses the directive on its side of the boundary and maps each segment
/// onto the features the crate supports: uncompressed, LZW, deflate and
/// PackBits strips with an optional horizontal-differencing predictor.
/// Anything else in the directive fails with `UnsupportedFormat`.
pub struct StandardTiffEncoder;

struct Directive<'a> {
    path: &'a str,
    compression: &'a str,
    layout: &'a str,
    multi_res: &'a str,
    format: &'a str,
    resolution: &'a str,
}

fn split_directive(directive: &str) -> Result<Directive<'_>> {
    let (path, opts) = directive
        .split_once(':')
        .ok_or_else(|| WriteError::EncodeError(format!("malformed directive: {directive}")))?;

    let mut segments = opts.split(',');
    let mut next = |name: &str| {
        segments
            .next()
            .ok_or_else(|| WriteError::EncodeError(format!("directive missing {name} segment")))
    };

    Ok(Directive {
        path,
        compression: next("compression")?,
        layout: next("layout")?,
        multi_res: next("multi_res")?,
        format: next("format")?,
        resolution: next("resolution")?,
    })
}

impl DirectiveEncoder for StandardTiffEncoder {
    fn write_tiff(&self, image: &ImageData, directive: &str) -> Result<()> {
        let parsed = split_directive(directive)?;
        debug!("Encoding TIFF image: {}x{}", image.width, image.height);

        if parsed.layout != "strip" {
            return Err(WriteError::UnsupportedFormat(format!(
                "layout {}: only strip output is implemented",
                parsed.layout
            )));
        }
        if parsed.multi_res != "flat" {
            return Err(WriteError::UnsupportedFormat(
                "pyramidal output is not implemented".to_string(),
            ));
        }
        if parsed.format != "manybit" {
            return Err(WriteError::UnsupportedFormat(
                "onebit output is not implemented".to_string(),
            ));
        }
        if let Some((_, resolution)) = parsed.resolution.split_once(':') {
            debug!("Ignoring resolution request {}", resolution);
        }

        let (method, detail) = match parsed.compression.split_once(':') {
            Some((method, detail)) => (method, Some(detail)),
            None => (parsed.compression, None),
        };
        let compression = match method {
            "none" => tiff::encoder::Compression::Uncompressed,
            "lzw" => tiff::encoder::Compression::Lzw,
            "deflate" => tiff::encoder::Compression::Deflate(
                tiff::encoder::compression::DeflateLevel::Balanced,
            ),
            "packbits" => tiff::encoder::Compression::Packbits,
            other => {
                return Err(WriteError::UnsupportedFormat(format!(
                    "compression {other} is not implemented"
                )));
            }
        };
        let predictor = match detail {
            Some("horizontal_differencing") => Some(tiff::tags::Predictor::Horizontal),
            Some("floating_point") => {
                return Err(WriteError::UnsupportedFormat(
                    "floating point predictor requires float samples".to_string(),
                ));
            }
            _ => None,
        };

        let file = File::create(parsed.path)?;
        let mut encoder = tiff::encoder::TiffEncoder::new(file)
            .map_err(|e| WriteError::EncodeError(e.to_string()))?
            .with_compression(compression);
        if let Some(predictor) = predictor {
            encoder = encoder.with_predictor(predictor);
        }

        encoder
            .write_image::<tiff::encoder::colortype::Gray8>(
                image.width as u32,
                image.height as u32,
                &image.data,
            )
            .map_err(|e| WriteError::EncodeError(e.to_string()))?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}
