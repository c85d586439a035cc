//! Container encoding: request model, page preparation, and the single
//! pass that writes header, IFDs, and strips into one buffer.

mod buffer;
mod ifd;
mod layout;

use tracing::{debug, trace};

use crate::error::{Result, TiffError};
use crate::{grayscale, RasterPage};

use self::buffer::TiffEncodeBuffer;

/// Everything one encode call needs: the pages in output order, the
/// resolution stamped on every page, and whether to force grayscale.
///
/// Pages are borrowed; the encoder never mutates them.
pub struct TiffEncodingRequest<'a> {
    pages: &'a [RasterPage],
    dpi: u32,
    grayscale: bool,
}

impl<'a> TiffEncodingRequest<'a> {
    /// `dpi` is used for both X and Y resolution, in pixels per inch.
    pub fn new(pages: &'a [RasterPage], dpi: u32) -> Self {
        Self {
            pages,
            dpi,
            grayscale: false,
        }
    }

    /// When enabled, every page is converted to grayscale before encoding,
    /// regardless of its original sample layout.
    pub fn grayscale(mut self, enable: bool) -> Self {
        self.grayscale = enable;
        self
    }
}

/// Encodes the requested pages into a single multi-page TIFF buffer.
///
/// Fails with [`TiffError::EmptyInput`] when no pages are supplied and
/// [`TiffError::MalformedPage`] when a page's pixel buffer disagrees with
/// its dimensions. Nothing is written on failure; the returned buffer is
/// always a complete file.
pub fn encode(request: &TiffEncodingRequest<'_>) -> Result<Vec<u8>> {
    if request.pages.is_empty() {
        return Err(TiffError::EmptyInput);
    }
    for page in request.pages {
        page.validate()?;
    }

    debug!(
        pages = request.pages.len(),
        dpi = request.dpi,
        grayscale = request.grayscale,
        "encoding multi-page tiff"
    );

    // Grayscale conversion must finish before planning: it changes the
    // sample count per pixel, and the planner needs final strip lengths.
    let converted;
    let pages: &[RasterPage] = if request.grayscale {
        converted = convert_pages(request.pages);
        &converted
    } else {
        request.pages
    };

    let (plans, total_len) = layout::plan_pages(pages);
    let mut wrt = TiffEncodeBuffer::new(total_len);
    for (page, plan) in pages.iter().zip(&plans) {
        trace!(
            width = page.width(),
            height = page.height(),
            ifd_start = plan.ifd_start,
            "writing page"
        );
        ifd::append_page(&mut wrt, page, request.dpi, plan);
    }

    Ok(wrt.into_bytes())
}

#[cfg(feature = "rayon")]
fn convert_pages(pages: &[RasterPage]) -> Vec<RasterPage> {
    use rayon::prelude::*;
    pages.par_iter().map(grayscale::to_grayscale).collect()
}

#[cfg(not(feature = "rayon"))]
fn convert_pages(pages: &[RasterPage]) -> Vec<RasterPage> {
    pages.iter().map(grayscale::to_grayscale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SampleLayout;

    #[test]
    fn empty_input_is_rejected() {
        let err = encode(&TiffEncodingRequest::new(&[], 300)).unwrap_err();
        assert!(matches!(err, TiffError::EmptyInput));
    }

    #[test]
    fn output_length_matches_plan_total() {
        let pages = [
            RasterPage::new(vec![0; 4], 2, 2, SampleLayout::Grayscale8).unwrap(),
            RasterPage::new(vec![0; 6], 1, 2, SampleLayout::Rgb8).unwrap(),
        ];
        let bytes = encode(&TiffEncodingRequest::new(&pages, 300)).unwrap();
        assert_eq!(bytes.len(), 8 + (166 + 4) + (166 + 6));
    }

    #[test]
    fn grayscale_flag_shrinks_rgb_strips() {
        let pages = [RasterPage::new(vec![0; 6], 2, 1, SampleLayout::Rgb8).unwrap()];

        let plain = encode(&TiffEncodingRequest::new(&pages, 300)).unwrap();
        let gray = encode(&TiffEncodingRequest::new(&pages, 300).grayscale(true)).unwrap();

        assert_eq!(plain.len(), 8 + 166 + 6);
        assert_eq!(gray.len(), 8 + 166 + 2);
    }

    #[test]
    fn grayscale_flag_keeps_grayscale_pages_byte_identical() {
        let pages =
            [RasterPage::new(vec![10, 20, 30, 40], 2, 2, SampleLayout::Grayscale8).unwrap()];

        let plain = encode(&TiffEncodingRequest::new(&pages, 300)).unwrap();
        let gray = encode(&TiffEncodingRequest::new(&pages, 300).grayscale(true)).unwrap();

        assert_eq!(plain, gray);
    }
}
