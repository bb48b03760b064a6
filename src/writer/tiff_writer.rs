use tracing::{info, instrument};

use crate::writer::encoder::DirectiveEncoder;
use crate::writer::error::Result;
use crate::writer::options::WriterOptions;
use crate::writer::standard_encoder::StandardTiffEncoder;
use crate::writer::types::ImageData;

/// Owns the pixel data, the option set and the encoder for a single write.
pub struct TiffWriter<E: DirectiveEncoder> {
    image: ImageData,
    options: WriterOptions,
    encoder: E,
}

impl TiffWriter<StandardTiffEncoder> {
    pub fn new(image: ImageData) -> Self {
        Self::with_encoder(image, StandardTiffEncoder)
    }
}

impl<E: DirectiveEncoder> TiffWriter<E> {
    pub fn with_encoder(image: ImageData, encoder: E) -> Self {
        Self {
            image,
            options: WriterOptions::default(),
            encoder,
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut WriterOptions {
        &mut self.options
    }

    /// Applies bulk overrides, e.g. parsed from a command line or a job
    /// description. See `WriterOptions::apply` for the semantics.
    pub fn configure<I, K, V>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.options.apply(overrides)
    }

    /// Serializes the options and hands the directive to the encoder.
    #[instrument(skip(self))]
    pub fn write(&self, path: &str) -> Result<()> {
        let directive = self.options.to_directive(path);
        info!(directive = %directive, "Writing TIFF");

        self.encoder.write_tiff(&self.image, &directive)?;

        info!(
            width = self.image.width,
            height = self.image.height,
            "Write complete"
        );
        Ok(())
    }
}
