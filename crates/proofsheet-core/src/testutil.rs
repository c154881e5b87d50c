//! Shared test fixtures: a minimal real JPEG and a little-endian TIFF/EXIF
//! block builder.
//!
//! The builder assembles byte-accurate TIFF structures (entry table, data
//! area, optional GPS or Exif sub-IFD) so parser tests exercise the same
//! inline vs. offset-indirect layouts that real camera files use.

/// One entry to place in a built IFD.
///
/// `value` holds the raw little-endian value bytes; the builder stores them
/// inline when they fit in the 4-byte value field and places them in the
/// data area behind the IFD otherwise.
pub struct TestEntry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    pub value: Vec<u8>,
}

impl TestEntry {
    /// An ASCII entry with the trailing NUL TIFF requires.
    pub fn ascii(tag: u16, text: &str) -> Self {
        let mut value = text.as_bytes().to_vec();
        value.push(0);
        TestEntry {
            tag,
            field_type: 2,
            count: value.len() as u32,
            value,
        }
    }

    pub fn short(tag: u16, v: u16) -> Self {
        TestEntry {
            tag,
            field_type: 3,
            count: 1,
            value: v.to_le_bytes().to_vec(),
        }
    }

    pub fn long(tag: u16, v: u32) -> Self {
        TestEntry {
            tag,
            field_type: 4,
            count: 1,
            value: v.to_le_bytes().to_vec(),
        }
    }

    pub fn rationals(tag: u16, pairs: &[(u32, u32)]) -> Self {
        let mut value = Vec::with_capacity(pairs.len() * 8);
        for (numerator, denominator) in pairs {
            value.extend(numerator.to_le_bytes());
            value.extend(denominator.to_le_bytes());
        }
        TestEntry {
            tag,
            field_type: 5,
            count: pairs.len() as u32,
            value,
        }
    }
}

/// Serialize one IFD (entry table, next-IFD pointer of 0, then the data
/// area) assuming it starts at `ifd_offset` within the TIFF block.
fn build_ifd(entries: &[TestEntry], ifd_offset: usize) -> Vec<u8> {
    let data_start = ifd_offset + 2 + 12 * entries.len() + 4;

    let mut table = Vec::new();
    table.extend((entries.len() as u16).to_le_bytes());
    let mut data: Vec<u8> = Vec::new();

    for entry in entries {
        table.extend(entry.tag.to_le_bytes());
        table.extend(entry.field_type.to_le_bytes());
        table.extend(entry.count.to_le_bytes());
        if entry.value.len() <= 4 {
            let mut inline = entry.value.clone();
            inline.resize(4, 0);
            table.extend(inline);
        } else {
            table.extend(((data_start + data.len()) as u32).to_le_bytes());
            data.extend(&entry.value);
        }
    }
    table.extend(0u32.to_le_bytes());
    table.extend(data);
    table
}

/// Assemble a full little-endian TIFF block: header, IFD0, and optionally a
/// GPS sub-IFD reachable through a tag 0x8825 pointer appended to IFD0.
pub fn build_tiff(ifd0: Vec<TestEntry>, gps: Option<Vec<TestEntry>>) -> Vec<u8> {
    match gps {
        Some(gps_entries) => build_tiff_with_sub_ifd(ifd0, 0x8825, gps_entries),
        None => {
            // "II", magic 42, IFD0 at offset 8
            let mut out = vec![b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
            out.extend(build_ifd(&ifd0, 8));
            out
        }
    }
}

/// Like [`build_tiff`], but linking the sub-IFD through an arbitrary pointer
/// tag (0x8825 for GPS, 0x8769 for the Exif sub-IFD).
pub fn build_tiff_with_sub_ifd(
    mut ifd0: Vec<TestEntry>,
    pointer_tag: u16,
    sub: Vec<TestEntry>,
) -> Vec<u8> {
    let mut out = vec![b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
    let ifd0_count = ifd0.len() + 1;
    let ifd0_data: usize = ifd0
        .iter()
        .filter(|e| e.value.len() > 4)
        .map(|e| e.value.len())
        .sum();
    let sub_offset = 8 + 2 + 12 * ifd0_count + 4 + ifd0_data;
    ifd0.push(TestEntry::long(pointer_tag, sub_offset as u32));
    out.extend(build_ifd(&ifd0, 8));
    debug_assert_eq!(out.len(), sub_offset);
    out.extend(build_ifd(&sub, sub_offset));
    out
}

/// Wrap a TIFF block in a JPEG envelope: SOI, one APP1 Exif segment, then
/// an SOS marker so the scanner stops where a real file would.
pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend(((6 + tiff.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend([0xFF, 0xDA]);
    out
}

/// Minimal valid JPEG bytes (1x1 pixel) with no APP1 segment.
pub const MINIMAL_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
    0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
    0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
    0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
    0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
    0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
    0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
    0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
    0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
    0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
    0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
    0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
    0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
    0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
    0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
    0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
    0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
    0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
    0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
    0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
    0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tiff_header() {
        let tiff = build_tiff(vec![], None);
        assert_eq!(&tiff[..2], b"II");
        assert_eq!(u16::from_le_bytes([tiff[2], tiff[3]]), 42);
        assert_eq!(u32::from_le_bytes([tiff[4], tiff[5], tiff[6], tiff[7]]), 8);
    }

    #[test]
    fn test_build_ifd_offset_placement() {
        // One inline entry and one offset-indirect entry
        let tiff = build_tiff(
            vec![
                TestEntry::ascii(0x010F, "Ab"),
                TestEntry::ascii(0x0110, "a longer string"),
            ],
            None,
        );
        // data area begins right after the IFD: 8 + 2 + 24 + 4
        let data_start = 38u32;
        let value_field = u32::from_le_bytes([tiff[30], tiff[31], tiff[32], tiff[33]]);
        assert_eq!(value_field, data_start);
        assert_eq!(&tiff[38..53], b"a longer string");
    }

    #[test]
    fn test_jpeg_with_exif_envelope() {
        let tiff = build_tiff(vec![], None);
        let jpeg = jpeg_with_exif(&tiff);
        assert_eq!(&jpeg[..2], [0xFF, 0xD8]);
        assert_eq!(&jpeg[2..4], [0xFF, 0xE1]);
        let declared = u16::from_be_bytes([jpeg[4], jpeg[5]]) as usize;
        assert_eq!(declared, jpeg.len() - 4 - 2); // excludes SOI/APP1 markers and SOS
        assert_eq!(&jpeg[6..12], b"Exif\0\0");
    }
}
