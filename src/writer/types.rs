//! Pixel buffer types

/// An owned 8-bit grayscale image handed to the encoder
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Row-major pixel data, one byte per pixel
    pub data: Vec<u8>,
}
