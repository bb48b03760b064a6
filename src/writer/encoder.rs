use crate::writer::error::Result;
use crate::writer::types::ImageData;

/// Entry point of the external encoder.
///
/// The directive string produced by `WriterOptions::to_directive` is the
/// entire contract: `path:compression,layout,multi_res,format,resolution`.
/// Implementations own parsing it and performing the actual encode and write.
pub trait DirectiveEncoder {
    fn write_tiff(&self, image: &ImageData, directive: &str) -> Result<()>;
}
