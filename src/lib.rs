//! Validated TIFF write directives.
//!
//! `writer::WriterOptions` validates a set of encoding options and serializes
//! them into a single directive string (`path:segments`) that the encoder
//! entry point consumes. `writer::TiffWriter` ties an image, an option set
//! and an encoder together for one write.

pub mod logger;
pub mod writer;

pub use writer::{
    Compression, DirectiveEncoder, ImageData, Layout, MultiRes, PixelFormat, Predictor, Result,
    ResolutionUnits, StandardTiffEncoder, TiffWriter, WriteError, WriterOptions,
};
