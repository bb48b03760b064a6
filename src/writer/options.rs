//! TIFF write option types and the validated directive builder

use std::fmt;
use std::str::FromStr;

use crate::writer::error::{Result, WriteError};

fn invalid(field: &'static str, reason: &str) -> WriteError {
    WriteError::InvalidOption {
        field,
        reason: reason.to_string(),
    }
}

fn invalid_member(field: &'static str, allowed: &[&str]) -> WriteError {
    invalid(field, &format!("must be one of {}", allowed.join(", ")))
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// JPEG compression, lossy; tuned by `quality`
    Jpeg,
    /// Deflate compression; honors `predictor`
    Deflate,
    /// PackBits run-length encoding
    Packbits,
    /// CCITT Group 4 fax compression, bilevel images only
    Ccittfax4,
    /// LZW compression; honors `predictor`
    Lzw,
}

impl Compression {
    const NAMES: [&'static str; 6] = ["none", "jpeg", "deflate", "packbits", "ccittfax4", "lzw"];

    pub fn as_str(self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Jpeg => "jpeg",
            Compression::Deflate => "deflate",
            Compression::Packbits => "packbits",
            Compression::Ccittfax4 => "ccittfax4",
            Compression::Lzw => "lzw",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compression {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Compression::None),
            "jpeg" => Ok(Compression::Jpeg),
            "deflate" => Ok(Compression::Deflate),
            "packbits" => Ok(Compression::Packbits),
            "ccittfax4" => Ok(Compression::Ccittfax4),
            "lzw" => Ok(Compression::Lzw),
            _ => Err(invalid_member("compression", &Self::NAMES)),
        }
    }
}

/// Predictor applied before LZW or deflate compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Predictor {
    #[default]
    None,
    HorizontalDifferencing,
    FloatingPoint,
}

impl Predictor {
    const NAMES: [&'static str; 3] = ["none", "horizontal_differencing", "floating_point"];

    pub fn as_str(self) -> &'static str {
        match self {
            Predictor::None => "none",
            Predictor::HorizontalDifferencing => "horizontal_differencing",
            Predictor::FloatingPoint => "floating_point",
        }
    }
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Predictor {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Predictor::None),
            "horizontal_differencing" => Ok(Predictor::HorizontalDifferencing),
            "floating_point" => Ok(Predictor::FloatingPoint),
            _ => Err(invalid_member("predictor", &Self::NAMES)),
        }
    }
}

/// Physical layout of the encoded pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Strip,
    Tile,
}

impl Layout {
    const NAMES: [&'static str; 2] = ["strip", "tile"];

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Strip => "strip",
            Layout::Tile => "tile",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strip" => Ok(Layout::Strip),
            "tile" => Ok(Layout::Tile),
            _ => Err(invalid_member("layout", &Self::NAMES)),
        }
    }
}

/// Single resolution or pyramidal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiRes {
    #[default]
    Flat,
    Pyramid,
}

impl MultiRes {
    const NAMES: [&'static str; 2] = ["flat", "pyramid"];

    pub fn as_str(self) -> &'static str {
        match self {
            MultiRes::Flat => "flat",
            MultiRes::Pyramid => "pyramid",
        }
    }
}

impl fmt::Display for MultiRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultiRes {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flat" => Ok(MultiRes::Flat),
            "pyramid" => Ok(MultiRes::Pyramid),
            _ => Err(invalid_member("multi_res", &Self::NAMES)),
        }
    }
}

/// Full bit depth or bilevel output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    #[default]
    Manybit,
    Onebit,
}

impl PixelFormat {
    const NAMES: [&'static str; 2] = ["manybit", "onebit"];

    pub fn as_str(self) -> &'static str {
        match self {
            PixelFormat::Manybit => "manybit",
            PixelFormat::Onebit => "onebit",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PixelFormat {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "manybit" => Ok(PixelFormat::Manybit),
            "onebit" => Ok(PixelFormat::Onebit),
            _ => Err(invalid_member("format", &Self::NAMES)),
        }
    }
}

/// Unit for the resolution tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionUnits {
    #[default]
    Cm,
    Inch,
}

impl ResolutionUnits {
    const NAMES: [&'static str; 2] = ["cm", "inch"];

    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionUnits::Cm => "cm",
            ResolutionUnits::Inch => "inch",
        }
    }
}

impl fmt::Display for ResolutionUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolutionUnits {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cm" => Ok(ResolutionUnits::Cm),
            "inch" => Ok(ResolutionUnits::Inch),
            _ => Err(invalid_member("resolution_units", &Self::NAMES)),
        }
    }
}

fn parse_pair<T: FromStr>(field: &'static str, value: &str) -> Result<(T, T)> {
    let mut parts = value.splitn(2, 'x');
    let first = parts.next().and_then(|p| p.parse().ok());
    let second = parts.next().and_then(|p| p.parse().ok());
    match (first, second) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(invalid(field, "must be two numbers separated by 'x'")),
    }
}

/// Validated option set for one TIFF write.
///
/// Every field always holds a value satisfying its constraint: the fallible
/// setters reject bad input before storing it, and the enum fields cannot hold
/// anything outside their member set. Serialization therefore never fails.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    compression: Compression,
    quality: u8,
    predictor: Predictor,
    layout: Layout,
    tile_size: (u32, u32),
    multi_res: MultiRes,
    format: PixelFormat,
    resolution_units: ResolutionUnits,
    resolution: Option<(f64, f64)>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            compression: Compression::None,
            quality: 75,
            predictor: Predictor::None,
            layout: Layout::Strip,
            tile_size: (128, 128),
            multi_res: MultiRes::Flat,
            format: PixelFormat::Manybit,
            resolution_units: ResolutionUnits::Cm,
            resolution: None,
        }
    }
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn predictor(&self) -> Predictor {
        self.predictor
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn tile_size(&self) -> (u32, u32) {
        self.tile_size
    }

    pub fn multi_res(&self) -> MultiRes {
        self.multi_res
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn resolution_units(&self) -> ResolutionUnits {
        self.resolution_units
    }

    /// `None` means "use the encoder's default resolution".
    pub fn resolution(&self) -> Option<(f64, f64)> {
        self.resolution
    }

    // The enum setters are plain assignments: the sum types make invalid
    // members unrepresentable. The untyped path in `apply` still runs the
    // membership check through `FromStr`.

    pub fn set_compression(&mut self, compression: Compression) {
        self.compression = compression;
    }

    pub fn set_predictor(&mut self, predictor: Predictor) {
        self.predictor = predictor;
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn set_multi_res(&mut self, multi_res: MultiRes) {
        self.multi_res = multi_res;
    }

    pub fn set_format(&mut self, format: PixelFormat) {
        self.format = format;
    }

    pub fn set_resolution_units(&mut self, units: ResolutionUnits) {
        self.resolution_units = units;
    }

    /// Only meaningful when compression is jpeg.
    pub fn set_quality(&mut self, quality: u8) -> Result<()> {
        if quality > 100 {
            return Err(invalid("quality", "must be a numeric value between 0 and 100"));
        }
        self.quality = quality;
        Ok(())
    }

    /// Only meaningful when layout is tile.
    pub fn set_tile_size(&mut self, width: u32, height: u32) -> Result<()> {
        if width <= 1 || height <= 1 {
            return Err(invalid("tile_size", "tile sizes must be larger than 1"));
        }
        self.tile_size = (width, height);
        Ok(())
    }

    pub fn set_resolution(&mut self, x: f64, y: f64) -> Result<()> {
        // written as a positivity requirement so NaN is rejected too
        if !(x > 0.0 && y > 0.0) {
            return Err(invalid("resolution", "must have an x and y larger than 0"));
        }
        self.resolution = Some((x, y));
        Ok(())
    }

    /// Applies named overrides in iteration order, each through its validated
    /// setter. Unrecognized keys are ignored, so callers may pass a superset
    /// of options without filtering. The first failing value aborts the
    /// remaining entries; earlier entries stay applied.
    pub fn apply<I, K, V>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in overrides {
            self.apply_one(key.as_ref(), value.as_ref())?;
        }
        Ok(())
    }

    fn apply_one(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "compression" => self.compression = value.parse()?,
            "predictor" => self.predictor = value.parse()?,
            "layout" => self.layout = value.parse()?,
            "multi_res" => self.multi_res = value.parse()?,
            "format" => self.format = value.parse()?,
            "resolution_units" => self.resolution_units = value.parse()?,
            "quality" => {
                let quality: i64 = value
                    .parse()
                    .map_err(|_| invalid("quality", "must be a numeric value between 0 and 100"))?;
                if !(0..=100).contains(&quality) {
                    return Err(invalid("quality", "must be a numeric value between 0 and 100"));
                }
                self.quality = quality as u8;
            }
            "tile_size" => {
                let (width, height) = parse_pair::<u32>("tile_size", value)?;
                self.set_tile_size(width, height)?;
            }
            "resolution" => {
                let (x, y) = parse_pair::<f64>("resolution", value)?;
                self.set_resolution(x, y)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Serializes the option set into the directive handed to the encoder:
    /// `path:compression,layout,multi_res,format,resolution`.
    ///
    /// Segment order, the `:` after the path, and the `,` between segments
    /// are the encoder contract; changing any of them is a breaking change.
    pub fn to_directive(&self, path: &str) -> String {
        format!(
            "{}:{},{},{},{},{}",
            path,
            self.compression_segment(),
            self.layout_segment(),
            self.multi_res,
            self.format,
            self.resolution_segment(),
        )
    }

    fn compression_segment(&self) -> String {
        match self.compression {
            Compression::Jpeg => format!("{}:{}", self.compression, self.quality),
            Compression::Lzw | Compression::Deflate => {
                format!("{}:{}", self.compression, self.predictor)
            }
            other => other.to_string(),
        }
    }

    fn layout_segment(&self) -> String {
        match self.layout {
            Layout::Tile => format!("{}:{}x{}", self.layout, self.tile_size.0, self.tile_size.1),
            Layout::Strip => self.layout.to_string(),
        }
    }

    fn resolution_segment(&self) -> String {
        match self.resolution {
            Some((x, y)) => format!("res_{}:{}x{}", self.resolution_units, x, y),
            None => format!("res_{}", self.resolution_units),
        }
    }
}
