//! Serializes one page's IFD block: the twelve baseline entries, the
//! next-IFD pointer, the resolution rationals, and the pixel strip, all at
//! offsets supplied by the layout plan.

use crate::{
    ifd,
    ifd::tags,
    types::{Short, URational},
    RasterPage,
};

use super::{buffer::TiffEncodeBuffer, layout::PageOffsetPlan};

pub(crate) fn append_page(
    wrt: &mut TiffEncodeBuffer,
    page: &RasterPage,
    dpi: u32,
    plan: &PageOffsetPlan,
) {
    let strip_byte_count = page.strip_len().try_into().unwrap();

    let ifd_entries = [
        ifd::Entry::new(ifd::Tag::ImageWidth, ifd::Value::Long(page.width())),
        ifd::Entry::new(ifd::Tag::ImageLength, ifd::Value::Long(page.height())),
        ifd::Entry::new(ifd::Tag::BitsPerSample, ifd::Value::Short(8)),
        ifd::Entry::new(
            ifd::Tag::Compression,
            ifd::Value::Short(tags::Compression::NoCompression as Short),
        ),
        ifd::Entry::new(
            ifd::Tag::PhotometricInterpretation,
            ifd::Value::Short(page.layout().photometric_interpretation() as Short),
        ),
        ifd::Entry::new(
            ifd::Tag::StripOffsets,
            ifd::Value::Long(plan.pixel_data_offset),
        ),
        ifd::Entry::new(
            ifd::Tag::SamplesPerPixel,
            ifd::Value::Short(page.layout().samples_per_pixel() as Short),
        ),
        ifd::Entry::new(ifd::Tag::RowsPerStrip, ifd::Value::Long(page.height())),
        ifd::Entry::new(ifd::Tag::StripByteCounts, ifd::Value::Long(strip_byte_count)),
        ifd::Entry::new(
            ifd::Tag::XResolution,
            ifd::Value::RationalOffset(plan.resolution_values_offset),
        ),
        ifd::Entry::new(
            ifd::Tag::YResolution,
            ifd::Value::RationalOffset(plan.resolution_values_offset + 8),
        ),
        ifd::Entry::new(
            ifd::Tag::ResolutionUnit,
            ifd::Value::Short(tags::ResolutionUnit::Inch as Short),
        ),
    ];

    debug_assert_eq!(ifd_entries.len(), ifd::ENTRIES_PER_PAGE);
    debug_assert!(
        ifd_entries
            .iter()
            .zip(ifd_entries.iter().skip(1))
            .all(|(prev, next)| prev.tag() <= next.tag()),
        "IFD entries are not sorted by tag"
    );

    let mut dir = wrt.ifd_at(plan.ifd_start, ifd_entries.len());
    dir.set_entry_count(ifd_entries.len().try_into().unwrap());
    for (entry_num, entry) in ifd_entries.iter().enumerate() {
        dir.entry(entry_num).set_all(entry);
    }
    dir.set_next_ifd_offset(plan.next_ifd_offset);

    wrt.set_rational_pair(
        plan.resolution_values_offset,
        URational::new(dpi, 1),
        URational::new(dpi, 1),
    );
    wrt.set_strip(plan.pixel_data_offset, page.pixels());
}
