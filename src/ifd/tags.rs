/// [`super::Tag::PhotometricInterpretation`]
#[derive(strum::FromRepr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub(crate) enum PhotometricInterpretation {
    WhiteIsZero = 0,
    BlackIsZero = 1,
    RGB = 2,
}

/// [`super::Tag::Compression`]
///
/// The container is always written uncompressed; the other baseline values
/// are kept for completeness of the constant set.
#[derive(strum::FromRepr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub(crate) enum Compression {
    NoCompression = 1,
    /// CCITT Group 3 1-Dimensional Modified Huffman run length encoding
    Huffman = 2,
    Lzw = 5,
    PackBits = 32773,
}

impl Default for Compression {
    fn default() -> Self {
        Self::NoCompression
    }
}

/// [`super::Tag::ResolutionUnit`]
#[derive(strum::FromRepr, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub(crate) enum ResolutionUnit {
    /// No absolute unit of measurement
    NoUnit = 1,
    Inch = 2,
    Centimeter = 3,
}

impl Default for ResolutionUnit {
    fn default() -> Self {
        Self::Inch
    }
}
