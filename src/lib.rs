//! Multi-page baseline TIFF container encoder.
//!
//! Takes ordered, already-rasterized pages (8-bit grayscale or RGB pixel
//! buffers) and serializes them into a single little-endian TIFF byte stream
//! with chained Image File Directories, one uncompressed strip per page, and
//! DPI resolution metadata. Built for archival scanning workflows where the
//! output must be readable by any baseline TIFF consumer.
//!
//! # Example
//!
//! ```ignore
//! use archive_tiff::{encode, RasterPage, SampleLayout, TiffEncodingRequest};
//!
//! let page = RasterPage::new(vec![0u8; 640 * 480], 640, 480, SampleLayout::Grayscale8)?;
//! let tiff = encode(&TiffEncodingRequest::new(&[page], 300).grayscale(true))?;
//! ```

pub mod colors;
pub mod encode;
pub mod grayscale;
pub mod sink;

mod error;
mod ifd;
mod types;

pub use colors::SampleLayout;
pub use encode::{encode, TiffEncodingRequest};
pub use error::{Result, TiffError};

/// TIFF magic bytes - little endian "II"
pub const TIFF_MAGIC_LE: [u8; 2] = [0x49, 0x49];

/// TIFF version (42)
pub const TIFF_VERSION: u16 = 42;

/// MIME type of the buffers this crate produces
pub const TIFF_MIME_TYPE: &str = "image/tiff";

/// One rasterized page: pixel dimensions, sample layout, and owned pixel
/// bytes arranged left to right, then top to bottom.
///
/// Pages are immutable once constructed; transforms return new pages.
#[derive(Clone, Debug)]
pub struct RasterPage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    layout: SampleLayout,
}

impl RasterPage {
    /// Fails with [`TiffError::MalformedPage`] if the number of bytes in
    /// `pixels` is not `width * height * samples_per_pixel`.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, layout: SampleLayout) -> Result<Self> {
        let expected = width as usize * height as usize * layout.samples_per_pixel();
        if pixels.len() != expected {
            return Err(TiffError::MalformedPage {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            layout,
        })
    }

    /// Builds an [`SampleLayout::Rgb8`] page from row-major RGBA samples,
    /// discarding the alpha channel. Rasterizers commonly hand back RGBA
    /// buffers even though the container never stores alpha.
    pub fn from_rgba8(rgba: &[u8], width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(TiffError::MalformedPage {
                expected,
                actual: rgba.len(),
            });
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for rgba_pixel in rgba.chunks_exact(4) {
            pixels.extend_from_slice(&rgba_pixel[..3]);
        }
        Self::new(pixels, width, height, SampleLayout::Rgb8)
    }

    /// Skips the length check; callers must hand over a buffer that already
    /// matches the dimensions.
    pub(crate) fn from_raw(pixels: Vec<u8>, width: u32, height: u32, layout: SampleLayout) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * layout.samples_per_pixel(),
        );
        Self {
            pixels,
            width,
            height,
            layout,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> SampleLayout {
        self.layout
    }

    /// Byte length of the page's uncompressed pixel strip.
    pub(crate) fn strip_len(&self) -> usize {
        self.pixels.len()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let expected =
            self.width as usize * self.height as usize * self.layout.samples_per_pixel();
        if self.pixels.len() != expected {
            return Err(TiffError::MalformedPage {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_short_pixel_buffer() {
        let err = RasterPage::new(vec![0; 5], 2, 3, SampleLayout::Grayscale8).unwrap_err();
        assert!(matches!(
            err,
            TiffError::MalformedPage {
                expected: 6,
                actual: 5,
            }
        ));
    }

    #[test]
    fn new_accepts_rgb_buffer() {
        let page = RasterPage::new(vec![0; 2 * 3 * 3], 2, 3, SampleLayout::Rgb8).unwrap();
        assert_eq!(page.width(), 2);
        assert_eq!(page.height(), 3);
        assert_eq!(page.layout(), SampleLayout::Rgb8);
    }

    #[test]
    fn from_rgba8_discards_alpha() {
        let rgba = [10, 20, 30, 255, 40, 50, 60, 0];
        let page = RasterPage::from_rgba8(&rgba, 2, 1).unwrap();
        assert_eq!(page.layout(), SampleLayout::Rgb8);
        assert_eq!(page.pixels(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn from_rgba8_rejects_wrong_length() {
        assert!(RasterPage::from_rgba8(&[0; 7], 2, 1).is_err());
    }
}
