use byteorder::{LittleEndian, WriteBytesExt};

use crate::{
    ifd,
    types::{Long, Short, URational},
    TIFF_MAGIC_LE, TIFF_VERSION,
};

use super::layout::HEADER_LEN;

/// The output buffer, allocated once at the planned total size and filled
/// in place. All multi-byte values are little-endian.
pub(crate) struct TiffEncodeBuffer {
    bytes: Vec<u8>,
}

pub(crate) struct IfdEncodeBuffer<'a>(&'a mut [u8]);

pub(crate) struct IfdEntryEncodeBuffer<'a>(&'a mut [u8; ifd::Entry::LEN]);

impl TiffEncodeBuffer {
    /// Allocates the full buffer and writes the 8-byte header: "II", the
    /// magic number 42, and the first-IFD offset (always 8, the IFD of the
    /// first page starts immediately after the header).
    pub(crate) fn new(total_len: usize) -> Self {
        let mut ret = Self {
            bytes: vec![0; total_len],
        };
        ret.bytes[..2].copy_from_slice(&TIFF_MAGIC_LE);
        (&mut ret.bytes[2..4])
            .write_u16::<LittleEndian>(TIFF_VERSION)
            .unwrap();
        (&mut ret.bytes[4..8])
            .write_u32::<LittleEndian>(HEADER_LEN as Long)
            .unwrap();
        ret
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub(crate) fn ifd_at(&mut self, start: Long, fields: usize) -> IfdEncodeBuffer<'_> {
        let start = start as usize;
        let end = start + ifd::get_len(fields);
        IfdEncodeBuffer(&mut self.bytes[start..end])
    }

    pub(crate) fn set_rational_pair(&mut self, offset: Long, x: URational, y: URational) {
        let mut slot = &mut self.bytes[offset as usize..offset as usize + 16];
        for rational in [x, y] {
            slot.write_u32::<LittleEndian>(rational.numerator).unwrap();
            slot.write_u32::<LittleEndian>(rational.denominator).unwrap();
        }
    }

    pub(crate) fn set_strip(&mut self, offset: Long, pixels: &[u8]) {
        let start = offset as usize;
        self.bytes[start..start + pixels.len()].copy_from_slice(pixels);
    }
}

impl<'a> IfdEncodeBuffer<'a> {
    pub(crate) fn set_entry_count(&mut self, fields: Short) {
        (&mut self.0[..ifd::ENTRY_COUNT_LEN])
            .write_u16::<LittleEndian>(fields)
            .unwrap();
    }

    pub(crate) fn entry(&mut self, entry_num: usize) -> IfdEntryEncodeBuffer<'_> {
        let start = ifd::ENTRY_COUNT_LEN + entry_num * ifd::Entry::LEN;
        let end = start + ifd::Entry::LEN;
        IfdEntryEncodeBuffer((&mut self.0[start..end]).try_into().unwrap())
    }

    pub(crate) fn set_next_ifd_offset(&mut self, offset: Long) {
        let buff_inx = self.0.len() - ifd::NEXT_IFD_OFFSET_LEN;
        (&mut self.0[buff_inx..])
            .write_u32::<LittleEndian>(offset)
            .unwrap();
    }
}

impl<'a> IfdEntryEncodeBuffer<'a> {
    pub(crate) fn set_all(&mut self, entry: &ifd::Entry) {
        // Write tag
        (&mut self.0[0..2])
            .write_u16::<LittleEndian>(entry.tag() as u16)
            .unwrap();
        // Write value type
        (&mut self.0[2..4])
            .write_u16::<LittleEndian>(entry.value().field_type_tag() as u16)
            .unwrap();
        // Every tag in the fixed page set carries a single value
        (&mut self.0[4..8]).write_u32::<LittleEndian>(1).unwrap();
        // Write the value, left-justified in the 4-byte field
        match *entry.value() {
            ifd::Value::Short(short) => {
                (&mut self.0[8..10]).write_u16::<LittleEndian>(short).unwrap();
            }
            ifd::Value::Long(long) => {
                (&mut self.0[8..12]).write_u32::<LittleEndian>(long).unwrap();
            }
            ifd::Value::RationalOffset(offset) => {
                (&mut self.0[8..12]).write_u32::<LittleEndian>(offset).unwrap();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_bytes_are_fixed() {
        let buf = TiffEncodeBuffer::new(8);
        assert_eq!(
            buf.into_bytes(),
            [0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn short_value_left_justified() {
        let mut buf = TiffEncodeBuffer::new(8 + ifd::get_len(1));
        let mut dir = buf.ifd_at(8, 1);
        dir.entry(0).set_all(&ifd::Entry::new(
            ifd::Tag::BitsPerSample,
            ifd::Value::Short(8),
        ));

        let bytes = buf.into_bytes();
        // tag 258, type 3, count 1, value 8 in the low half of the field
        assert_eq!(
            &bytes[10..22],
            &[0x02, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn next_ifd_offset_lands_at_block_end() {
        let total = 8 + ifd::get_len(ifd::ENTRIES_PER_PAGE);
        let mut buf = TiffEncodeBuffer::new(total);
        buf.ifd_at(8, ifd::ENTRIES_PER_PAGE).set_next_ifd_offset(0xAABB);

        let bytes = buf.into_bytes();
        assert_eq!(&bytes[total - 4..], &[0xBB, 0xAA, 0x00, 0x00]);
    }
}
