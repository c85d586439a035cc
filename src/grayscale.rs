//! Luminance-weighted grayscale conversion.

use crate::{RasterPage, SampleLayout};

/// ITU-R BT.601 luma of one RGB pixel, rounded half away from zero.
///
/// The rounding rule matters: downstream byte-exact comparisons depend on
/// `0.299 * 255` becoming 76, not 75.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32).round() as u8
}

/// Converts a page to [`SampleLayout::Grayscale8`]. An already-grayscale page
/// comes back as an equivalent copy, so the transform is idempotent.
pub fn to_grayscale(page: &RasterPage) -> RasterPage {
    match page.layout() {
        SampleLayout::Grayscale8 => page.clone(),
        SampleLayout::Rgb8 => {
            let gray: Vec<u8> = page
                .pixels()
                .chunks_exact(3)
                .map(|rgb| luminance(rgb[0], rgb[1], rgb[2]))
                .collect();
            RasterPage::from_raw(gray, page.width(), page.height(), SampleLayout::Grayscale8)
        }
    }
}
