//! TIFF writing module
//!
//! This module builds validated write directives and hands them to a
//! pluggable encoder. `WriterOptions` holds the per-write option set,
//! `TiffWriter` orchestrates one write, and `StandardTiffEncoder` is the
//! default directive consumer.

mod encoder;
mod error;
mod options;
mod standard_encoder;
mod tiff_writer;
pub mod types;


pub use encoder::DirectiveEncoder;
pub use error::{Result, WriteError};
pub use options::{
    Compression, Layout, MultiRes, PixelFormat, Predictor, ResolutionUnits, WriterOptions,
};
pub use standard_encoder::StandardTiffEncoder;
pub use tiff_writer::TiffWriter;
pub use types::ImageData;
