//! TIFF header and IFD decoding for the EXIF block.
//!
//! The TIFF block handed over by the segment scanner is self-contained: all
//! offsets inside it, including IFD positions and offset-indirect values,
//! are relative to its first byte. Every multi-byte read goes through the
//! bounds-checked [`Endian`] helpers, so a truncated or hostile block
//! degrades to partial metadata instead of panicking.

use super::gps;
use super::types::{ExifMetadata, GpsCoordinate, MetadataError};

/// 16-bit magic constant following the byte-order marker.
pub const TIFF_MAGIC: u16 = 42;
/// Size of one IFD entry in bytes: tag(2) + type(2) + count(4) + value(4).
const IFD_ENTRY_LEN: usize = 12;

// IFD0 tags mapped to metadata fields.
const TAG_MAKE: u16 = 0x010F;
const TAG_MODEL: u16 = 0x0110;
const TAG_SOFTWARE: u16 = 0x0131;
const TAG_DATE_TIME: u16 = 0x0132;
/// Pointer to the Exif sub-IFD.
const TAG_EXIF_IFD: u16 = 0x8769;
/// Pointer to the GPS sub-IFD.
const TAG_GPS_IFD: u16 = 0x8825;

// Exif sub-IFD date tags, used as fallbacks when IFD0 carries no DateTime.
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;

// GPS sub-IFD tags.
const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
const TAG_GPS_LATITUDE: u16 = 0x0002;
const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
const TAG_GPS_LONGITUDE: u16 = 0x0004;

// TIFF field types.
const TYPE_BYTE: u16 = 1;
const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

/// Byte order selected by the TIFF header for all reads in the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    #[inline]
    fn read_u16(self, data: &[u8], offset: usize) -> Option<u16> {
        let bytes = data.get(offset..offset + 2)?;
        Some(match self {
            Endian::Little => u16::from_le_bytes([bytes[0], bytes[1]]),
            Endian::Big => u16::from_be_bytes([bytes[0], bytes[1]]),
        })
    }

    #[inline]
    fn read_u32(self, data: &[u8], offset: usize) -> Option<u32> {
        let bytes = data.get(offset..offset + 4)?;
        Some(match self {
            Endian::Little => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            Endian::Big => u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        })
    }
}

/// Byte size of one value for a TIFF field type, or `None` for types this
/// decoder does not interpret.
fn type_unit_size(field_type: u16) -> Option<usize> {
    match field_type {
        TYPE_BYTE | TYPE_ASCII => Some(1),
        TYPE_SHORT => Some(2),
        TYPE_LONG => Some(4),
        TYPE_RATIONAL => Some(8),
        _ => None,
    }
}

/// One 12-byte IFD entry, plus where it sits so inline values can be read
/// back out of the block.
#[derive(Debug, Clone, Copy)]
struct IfdEntry {
    tag: u16,
    field_type: u16,
    count: u32,
    /// The raw 4-byte value field interpreted as a u32; meaningful as an
    /// offset only when the value does not fit inline.
    value_field: u32,
    /// Absolute offset of the 4-byte value field within the TIFF block.
    value_pos: usize,
}

impl IfdEntry {
    /// Read the entry starting at `offset` (caller guarantees 12 bytes).
    fn read(tiff: &[u8], endian: Endian, offset: usize) -> Option<Self> {
        Some(IfdEntry {
            tag: endian.read_u16(tiff, offset)?,
            field_type: endian.read_u16(tiff, offset + 2)?,
            count: endian.read_u32(tiff, offset + 4)?,
            value_field: endian.read_u32(tiff, offset + 8)?,
            value_pos: offset + 8,
        })
    }

    /// Locate this entry's value bytes: inline in the 4-byte value field
    /// when the total size fits, otherwise at the offset the value field
    /// holds. Offsets are relative to the TIFF header start, i.e. index 0
    /// of `tiff`. Returns `(start, total)` after bounds-checking.
    fn value_location(&self, tiff: &[u8]) -> Option<(usize, usize)> {
        let unit = type_unit_size(self.field_type)?;
        let total = unit.checked_mul(self.count as usize)?;
        let start = if total <= 4 {
            self.value_pos
        } else {
            self.value_field as usize
        };
        if start.checked_add(total)? > tiff.len() {
            return None;
        }
        Some((start, total))
    }

    /// Decode the entry's value. Types outside the supported set come back
    /// as [`IfdValue::Unsupported`] rather than failing the walk.
    fn decode(&self, tiff: &[u8], endian: Endian) -> IfdValue {
        if type_unit_size(self.field_type).is_none() {
            return IfdValue::Unsupported(self.field_type);
        }
        let Some((start, total)) = self.value_location(tiff) else {
            return IfdValue::Unsupported(self.field_type);
        };
        match self.field_type {
            TYPE_ASCII => {
                let raw = &tiff[start..start + total];
                let text: String = raw
                    .iter()
                    .take_while(|&&b| b != 0)
                    .map(|&b| b as char)
                    .collect();
                IfdValue::Ascii(text)
            }
            TYPE_SHORT => match endian.read_u16(tiff, start) {
                Some(v) => IfdValue::Short(v),
                None => IfdValue::Unsupported(self.field_type),
            },
            TYPE_LONG => match endian.read_u32(tiff, start) {
                Some(v) => IfdValue::Long(v),
                None => IfdValue::Unsupported(self.field_type),
            },
            TYPE_RATIONAL => {
                let mut pairs = Vec::with_capacity(self.count as usize);
                for i in 0..self.count as usize {
                    let num = endian.read_u32(tiff, start + i * 8);
                    let den = endian.read_u32(tiff, start + i * 8 + 4);
                    match (num, den) {
                        (Some(n), Some(d)) => pairs.push((n, d)),
                        _ => return IfdValue::Unsupported(self.field_type),
                    }
                }
                IfdValue::Rationals(pairs)
            }
            _ => IfdValue::Unsupported(self.field_type),
        }
    }
}

/// A decoded IFD entry value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum IfdValue {
    Ascii(String),
    Short(u16),
    Long(u32),
    Rationals(Vec<(u32, u32)>),
    /// Present but not interpreted (unknown type or unreadable data).
    Unsupported(u16),
}

impl IfdValue {
    fn into_ascii(self) -> Option<String> {
        match self {
            IfdValue::Ascii(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    fn as_u32(&self) -> Option<u32> {
        match self {
            IfdValue::Short(v) => Some(u32::from(*v)),
            IfdValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    fn into_rationals(self) -> Option<Vec<(u32, u32)>> {
        match self {
            IfdValue::Rationals(pairs) => Some(pairs),
            _ => None,
        }
    }

    fn into_reference_char(self) -> Option<char> {
        self.into_ascii().and_then(|s| s.chars().next())
    }
}

/// Decode a TIFF/EXIF block into a metadata record.
///
/// Never fails: an invalid byte order or magic number yields an empty
/// record, and truncation mid-walk yields whatever was decoded up to that
/// point.
pub fn decode_tiff(tiff: &[u8]) -> ExifMetadata {
    try_decode(tiff).unwrap_or_default()
}

fn try_decode(tiff: &[u8]) -> Result<ExifMetadata, MetadataError> {
    let endian = match (tiff.first(), tiff.get(1)) {
        (Some(b'I'), Some(b'I')) => Endian::Little,
        (Some(b'M'), Some(b'M')) => Endian::Big,
        _ => return Err(MetadataError::UnsupportedByteOrder),
    };
    if endian.read_u16(tiff, 2) != Some(TIFF_MAGIC) {
        return Err(MetadataError::BadTiffMagic);
    }

    let mut meta = ExifMetadata::default();
    // offset to IFD0, relative to the header start
    let Some(ifd0_offset) = endian.read_u32(tiff, 4) else {
        return Ok(meta);
    };
    read_ifd0(tiff, endian, ifd0_offset as usize, &mut meta);
    Ok(meta)
}

/// Walk IFD0, filling in the fields this tool cares about. Stops early when
/// fewer than 12 bytes remain for the next entry.
///
/// The date falls back to DateTimeOriginal, then DateTimeDigitized, from the
/// Exif sub-IFD when IFD0 itself carries no DateTime tag. Many cameras write
/// the capture date only into the sub-IFD.
fn read_ifd0(tiff: &[u8], endian: Endian, offset: usize, meta: &mut ExifMetadata) {
    let mut exif_ifd = None;
    for entry in ifd_entries(tiff, endian, offset) {
        match entry.tag {
            TAG_MAKE => meta.manufacturer = entry.decode(tiff, endian).into_ascii(),
            TAG_MODEL => meta.model = entry.decode(tiff, endian).into_ascii(),
            TAG_SOFTWARE => meta.software = entry.decode(tiff, endian).into_ascii(),
            TAG_DATE_TIME => meta.date_time = entry.decode(tiff, endian).into_ascii(),
            TAG_EXIF_IFD => exif_ifd = entry.decode(tiff, endian).as_u32(),
            TAG_GPS_IFD => {
                if let Some(gps_offset) = entry.decode(tiff, endian).as_u32() {
                    meta.gps = read_gps_ifd(tiff, endian, gps_offset as usize);
                }
            }
            _ => {}
        }
    }

    if meta.date_time.is_none() {
        if let Some(exif_offset) = exif_ifd {
            meta.date_time = read_exif_ifd_date(tiff, endian, exif_offset as usize);
        }
    }
}

/// Look up the fallback capture date in the Exif sub-IFD:
/// DateTimeOriginal wins over DateTimeDigitized.
fn read_exif_ifd_date(tiff: &[u8], endian: Endian, offset: usize) -> Option<String> {
    let mut original = None;
    let mut digitized = None;
    for entry in ifd_entries(tiff, endian, offset) {
        match entry.tag {
            TAG_DATE_TIME_ORIGINAL => original = entry.decode(tiff, endian).into_ascii(),
            TAG_DATE_TIME_DIGITIZED => digitized = entry.decode(tiff, endian).into_ascii(),
            _ => {}
        }
    }
    original.or(digitized)
}

/// Follow the GPS sub-IFD and convert its DMS triplets.
///
/// Returns `None` when the directory is unreadable, a triplet is missing,
/// or the result is the null-island pair.
fn read_gps_ifd(tiff: &[u8], endian: Endian, offset: usize) -> Option<GpsCoordinate> {
    let mut latitude_ref = None;
    let mut latitude = None;
    let mut longitude_ref = None;
    let mut longitude = None;

    for entry in ifd_entries(tiff, endian, offset) {
        match entry.tag {
            TAG_GPS_LATITUDE_REF => {
                latitude_ref = entry.decode(tiff, endian).into_reference_char()
            }
            TAG_GPS_LATITUDE => latitude = entry.decode(tiff, endian).into_rationals(),
            TAG_GPS_LONGITUDE_REF => {
                longitude_ref = entry.decode(tiff, endian).into_reference_char()
            }
            TAG_GPS_LONGITUDE => longitude = entry.decode(tiff, endian).into_rationals(),
            _ => {}
        }
    }

    let coordinate = GpsCoordinate::new(
        gps::from_dms(&latitude?, latitude_ref.unwrap_or('N')),
        gps::from_dms(&longitude?, longitude_ref.unwrap_or('E')),
    );
    if coordinate.is_null() {
        None
    } else {
        Some(coordinate)
    }
}

/// Iterate the entries of one IFD, stopping early at a truncated directory.
fn ifd_entries(tiff: &[u8], endian: Endian, offset: usize) -> impl Iterator<Item = IfdEntry> + '_ {
    let count = endian.read_u16(tiff, offset).unwrap_or(0) as usize;
    let first = offset + 2;
    (0..count)
        .map(move |i| first + i * IFD_ENTRY_LEN)
        .take_while(move |pos| tiff.len().saturating_sub(*pos) >= IFD_ENTRY_LEN)
        .filter_map(move |pos| IfdEntry::read(tiff, endian, pos))
}
