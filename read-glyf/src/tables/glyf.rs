//! The [glyf (Glyph Data)](https://docs.microsoft.com/en-us/typography/opentype/spec/glyf) table

mod outline;

use alloc::vec::Vec;
use core::fmt;

use sfnt_types::{Point, Scalar, Tag};

use crate::{
    font_data::{Cursor, FontData},
    read::ReadError,
};

pub use outline::{CurvePoint, GlyphOutline};

/// 'glyf'
pub const TAG: Tag = Tag::new(b"glyf");

/// Flags used in [`GlyphOutline`] and in the encoded simple glyph.
///
/// Unlike most flag sets, reading one from font data keeps every bit,
/// including the reserved high bit, so that the flags of a decoded outline
/// are exactly what the font contains.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct SimpleGlyphFlags {
    bits: u8,
}

impl SimpleGlyphFlags {
    /// Bit 0: If set, the point is on the curve; otherwise, it is off the
    /// curve.
    pub const ON_CURVE_POINT: Self = Self { bits: 0x01 };

    /// Bit 1: If set, the corresponding x-coordinate is 1 byte long, and the
    /// sign is determined by the X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR flag.
    /// If not set, its interpretation depends on the
    /// X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR flag: If that other flag is set,
    /// the x-coordinate is the same as the previous x-coordinate, and no
    /// element is added to the xCoordinates array. If both flags are not
    /// set, the corresponding element in the xCoordinates array is two bytes
    /// and interpreted as a signed integer.
    pub const X_SHORT_VECTOR: Self = Self { bits: 0x02 };

    /// Bit 2: If set, the corresponding y-coordinate is 1 byte long, and the
    /// sign is determined by the Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR flag.
    /// Otherwise, as for the x-coordinate.
    pub const Y_SHORT_VECTOR: Self = Self { bits: 0x04 };

    /// Bit 3: If set, the next byte (read as unsigned) specifies the number
    /// of additional times this flag byte is to be repeated in the logical
    /// flags array.
    pub const REPEAT_FLAG: Self = Self { bits: 0x08 };

    /// Bit 4: This flag has two meanings, depending on how the
    /// X_SHORT_VECTOR flag is set. If X_SHORT_VECTOR is set, this bit
    /// describes the sign of the value, with 1 equaling positive and 0
    /// negative. If X_SHORT_VECTOR is not set and this bit is set, then the
    /// current x-coordinate is the same as the previous x-coordinate.
    pub const X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR: Self = Self { bits: 0x10 };

    /// Bit 5: As bit 4, for the y-coordinate.
    pub const Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR: Self = Self { bits: 0x20 };

    /// Bit 6: If set, contours in the glyph description may overlap.
    pub const OVERLAP_SIMPLE: Self = Self { bits: 0x40 };
}

impl SimpleGlyphFlags {
    ///  Returns an empty set of flags.
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns the set containing all flags.
    #[inline]
    pub const fn all() -> Self {
        Self {
            bits: Self::ON_CURVE_POINT.bits
                | Self::X_SHORT_VECTOR.bits
                | Self::Y_SHORT_VECTOR.bits
                | Self::REPEAT_FLAG.bits
                | Self::X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR.bits
                | Self::Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR.bits
                | Self::OVERLAP_SIMPLE.bits,
        }
    }

    /// Returns the raw value of the flags currently stored.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Convert from underlying bit representation, dropping any bits
    /// that do not correspond to flags.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self {
            bits: bits & Self::all().bits,
        }
    }

    /// Convert from underlying bit representation, keeping all bits.
    #[inline]
    pub const fn from_bits_retain(bits: u8) -> Self {
        Self { bits }
    }

    /// Returns `true` if no flags are currently stored.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if there are flags common to both `self` and `other`.
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Returns `true` if all of the flags in `other` are contained within `self`.
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Inserts the specified flags in-place.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.bits |= other.bits;
    }

    /// Removes the specified flags in-place.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.bits &= !other.bits;
    }
}

impl core::ops::BitOr for SimpleGlyphFlags {
    type Output = Self;

    /// Returns the union of the two sets of flags.
    #[inline]
    fn bitor(self, other: SimpleGlyphFlags) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }
}

impl core::ops::BitAnd for SimpleGlyphFlags {
    type Output = Self;

    /// Returns the intersection between the two sets of flags.
    #[inline]
    fn bitand(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }
}

impl fmt::Debug for SimpleGlyphFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let members: &[(&str, Self)] = &[
            ("ON_CURVE_POINT", Self::ON_CURVE_POINT),
            ("X_SHORT_VECTOR", Self::X_SHORT_VECTOR),
            ("Y_SHORT_VECTOR", Self::Y_SHORT_VECTOR),
            ("REPEAT_FLAG", Self::REPEAT_FLAG),
            (
                "X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR",
                Self::X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR,
            ),
            (
                "Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR",
                Self::Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR,
            ),
            ("OVERLAP_SIMPLE", Self::OVERLAP_SIMPLE),
        ];
        let mut first = true;
        for (name, value) in members {
            if self.contains(*value) {
                if !first {
                    f.write_str(" | ")?;
                }
                first = false;
                f.write_str(name)?;
            }
        }
        let unknown = self.bits & !Self::all().bits;
        if unknown != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            write!(f, "{unknown:#04x}")?;
        }
        if first {
            f.write_str("(empty)")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for SimpleGlyphFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.bits, f)
    }
}

impl Scalar for SimpleGlyphFlags {
    type Raw = <u8 as Scalar>::Raw;

    fn to_raw(self) -> Self::Raw {
        self.bits().to_raw()
    }

    fn from_raw(raw: Self::Raw) -> Self {
        Self::from_bits_retain(u8::from_raw(raw))
    }
}

/// Decode the simple glyph whose record starts at `offset` in `data`.
///
/// The whole glyph is decoded or nothing is: any read past the end of the
/// data, a repeat run longer than the point count, or contour end points
/// that do not strictly increase yield [`ReadError::MalformedGlyph`]. A
/// negative contour count marks a composite glyph, which is reported as
/// [`ReadError::UnsupportedGlyphFormat`] before anything else is read.
///
/// This does not know where the record ends, so an empty glyph (one whose
/// `loca` entries are equal) must be detected by the caller.
pub fn decode_simple_glyph(data: FontData, offset: usize) -> Result<GlyphOutline, ReadError> {
    let mut cursor = data
        .cursor_at(offset)
        .map_err(|_| ReadError::MalformedGlyph("glyph offset is past the end of the data"))?;
    let num_contours: i16 = cursor
        .read()
        .map_err(|_| ReadError::MalformedGlyph("glyph header is truncated"))?;
    if num_contours < 0 {
        return Err(ReadError::UnsupportedGlyphFormat(num_contours));
    }
    // xMin, yMin, xMax, yMax
    cursor
        .skip(8)
        .map_err(|_| ReadError::MalformedGlyph("glyph header is truncated"))?;

    let contour_end_indices = (0..num_contours)
        .map(|_| cursor.read::<u16>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ReadError::MalformedGlyph("contour end points are truncated"))?;
    if contour_end_indices.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ReadError::MalformedGlyph(
            "contour end points are not increasing",
        ));
    }
    let num_points = contour_end_indices
        .last()
        .map(|last| *last as usize + 1)
        .unwrap_or(0);

    let instruction_len: u16 = cursor
        .read()
        .map_err(|_| ReadError::MalformedGlyph("instruction length is truncated"))?;
    cursor
        .skip(instruction_len as usize)
        .map_err(|_| ReadError::MalformedGlyph("instructions are truncated"))?;

    let flags = expand_flags(&mut cursor, num_points)?;
    let x_coords = Axis::X.decode(&flags, &mut cursor)?;
    let y_coords = Axis::Y.decode(&flags, &mut cursor)?;
    let points = x_coords
        .into_iter()
        .zip(y_coords)
        .map(|(x, y)| Point::new(x, y))
        .collect();

    Ok(GlyphOutline {
        points,
        flags,
        contour_end_indices,
    })
}

/// Read the packed flag array, expanding repeats, until there is exactly
/// one flag per point.
fn expand_flags(
    cursor: &mut Cursor,
    num_points: usize,
) -> Result<Vec<SimpleGlyphFlags>, ReadError> {
    let truncated = |_| ReadError::MalformedGlyph("flags are truncated");
    let mut flags = Vec::with_capacity(num_points);
    while flags.len() < num_points {
        let flag: SimpleGlyphFlags = cursor.read().map_err(truncated)?;
        let count = if flag.contains(SimpleGlyphFlags::REPEAT_FLAG) {
            cursor.read::<u8>().map_err(truncated)? as usize + 1
        } else {
            1
        };
        if count > num_points - flags.len() {
            return Err(ReadError::MalformedGlyph(
                "flag repeat count exceeds the number of points",
            ));
        }
        flags.extend(core::iter::repeat(flag).take(count));
    }
    Ok(flags)
}

/// The pair of flag bits that say how one axis's coordinates are stored.
#[derive(Clone, Copy, Debug)]
struct Axis {
    short: SimpleGlyphFlags,
    same_or_positive: SimpleGlyphFlags,
    truncated: &'static str,
}

impl Axis {
    const X: Axis = Axis {
        short: SimpleGlyphFlags::X_SHORT_VECTOR,
        same_or_positive: SimpleGlyphFlags::X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR,
        truncated: "x coordinates are truncated",
    };

    const Y: Axis = Axis {
        short: SimpleGlyphFlags::Y_SHORT_VECTOR,
        same_or_positive: SimpleGlyphFlags::Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR,
        truncated: "y coordinates are truncated",
    };

    fn read_delta(self, flag: SimpleGlyphFlags, cursor: &mut Cursor) -> Result<i32, ReadError> {
        match (flag.contains(self.short), flag.contains(self.same_or_positive)) {
            (true, true) => cursor.read::<u8>().map(i32::from),
            (true, false) => cursor.read::<u8>().map(|delta| -i32::from(delta)),
            (false, false) => cursor.read::<i16>().map(i32::from),
            (false, true) => Ok(0),
        }
    }

    /// Read one delta per flag and return the absolute coordinates.
    fn decode(self, flags: &[SimpleGlyphFlags], cursor: &mut Cursor) -> Result<Vec<i32>, ReadError> {
        let deltas = flags
            .iter()
            .map(|flag| self.read_delta(*flag, cursor))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ReadError::MalformedGlyph(self.truncated))?;
        Ok(deltas
            .into_iter()
            .scan(0i32, |coord, delta| {
                *coord = coord.wrapping_add(delta);
                Some(*coord)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyf_test_data::{be_buffer, glyf};
    use pretty_assertions::assert_eq;

    fn decode(record: &[u8]) -> Result<GlyphOutline, ReadError> {
        decode_simple_glyph(FontData::new(record), 0)
    }

    fn points(outline: &GlyphOutline) -> Vec<(i32, i32)> {
        outline.points.iter().map(|pt| (pt.x, pt.y)).collect()
    }

    #[test]
    fn triangle() {
        let outline = decode(glyf::TRIANGLE).unwrap();
        assert_eq!(points(&outline), [(10, 0), (10, 10), (0, 0)]);
        assert_eq!(outline.contour_end_indices, [2]);
        assert!(outline.curve_points().all(|pt| pt.on_curve));
    }

    #[test]
    fn square_with_hole() {
        let outline = decode(glyf::SQUARE_WITH_HOLE).unwrap();
        assert_eq!(
            points(&outline),
            [
                (0, 0),
                (300, 0),
                (300, 300),
                (0, 300),
                (100, 200),
                (200, 200),
                (200, 100),
                (100, 100),
            ]
        );
        assert_eq!(outline.contour_end_indices, [3, 7]);
        let flags = outline.flags.iter().map(|f| f.bits()).collect::<Vec<_>>();
        assert_eq!(flags, [0x31, 0x21, 0x11, 0x21, 0x1F, 0x1F, 0x1F, 0x23]);
    }

    #[test]
    fn record_at_offset() {
        let mut data = vec![0xAA; 6];
        data.extend_from_slice(glyf::TRIANGLE);
        let outline = decode_simple_glyph(FontData::new(&data), 6).unwrap();
        assert_eq!(points(&outline), [(10, 0), (10, 10), (0, 0)]);
        assert!(matches!(
            decode_simple_glyph(FontData::new(&data), data.len() + 1),
            Err(ReadError::MalformedGlyph(_))
        ));
    }

    #[test]
    fn contour_ends_match_points() {
        for record in [glyf::TRIANGLE, glyf::SQUARE_WITH_HOLE] {
            let outline = decode(record).unwrap();
            assert!(outline
                .contour_end_indices
                .windows(2)
                .all(|pair| pair[0] < pair[1]));
            assert_eq!(
                outline.contour_end_indices.last().map(|end| *end as usize),
                Some(outline.points.len() - 1)
            );
            assert_eq!(outline.flags.len(), outline.points.len());
        }
    }

    #[test]
    fn repeat_flag_expands() {
        // one flag byte and one count byte make six flags
        let data = [0x39, 5, 0xFF];
        let mut cursor = FontData::new(&data).cursor();
        let flags = expand_flags(&mut cursor, 6).unwrap();
        assert_eq!(flags, [SimpleGlyphFlags::from_bits_retain(0x39); 6]);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn flag_sequence_round_trip() {
        let data = [0x01, 0x09, 2, 0x31, 0x08, 0];
        let flags = expand_flags(&mut FontData::new(&data).cursor(), 6).unwrap();
        let bits = flags.iter().map(|f| f.bits()).collect::<Vec<_>>();
        assert_eq!(bits, [0x01, 0x09, 0x09, 0x09, 0x31, 0x08]);
    }

    #[test]
    fn repeat_past_point_count() {
        assert_eq!(
            decode(glyf::OVERLONG_REPEAT),
            Err(ReadError::MalformedGlyph(
                "flag repeat count exceeds the number of points"
            ))
        );
    }

    #[test]
    fn coordinates_are_cumulative() {
        let flags = [0x12, 0x02, 0x00, 0x10, 0x00].map(SimpleGlyphFlags::from_bits_retain);
        let data = be_buffer! { 5u8, 3u8, 256i16, (-300i16) };
        let mut cursor = FontData::new(&data).cursor();
        let xs = Axis::X.decode(&flags, &mut cursor).unwrap();
        assert_eq!(xs, [5, 2, 258, 258, -42]);
        assert_eq!(cursor.remaining_bytes(), 0);
    }

    #[test]
    fn y_axis_uses_its_own_bits() {
        // x bits say "skip", y bits say "short positive"
        let flags = [0x34, 0x34].map(SimpleGlyphFlags::from_bits_retain);
        let mut cursor = FontData::new(&[7, 1]).cursor();
        assert_eq!(Axis::X.decode(&flags, &mut cursor).unwrap(), [0, 0]);
        assert_eq!(Axis::Y.decode(&flags, &mut cursor).unwrap(), [7, 8]);
    }

    #[test]
    fn reserved_flag_bit_is_kept() {
        let record = be_buffer! {
            1i16, 0i16, 0i16, 0i16, 0i16,
            0u16, 0u16,
            0xB1u8
        };
        let outline = decode(&record).unwrap();
        assert_eq!(outline.flags[0].bits(), 0xB1);
        assert!(outline.on_curve(0));
    }

    #[test]
    fn composite_is_unsupported() {
        assert_eq!(
            decode(glyf::COMPOSITE),
            Err(ReadError::UnsupportedGlyphFormat(-1))
        );
        // nothing past the contour count is read
        assert_eq!(
            decode(&[0xFF, 0xFE]),
            Err(ReadError::UnsupportedGlyphFormat(-2))
        );
    }

    #[test]
    fn zero_contours() {
        let record = be_buffer! { 0i16, 0i16, 0i16, 0i16, 0i16, 0u16 };
        let outline = decode(&record).unwrap();
        assert!(outline.is_empty());
        assert_eq!(outline.num_contours(), 0);
    }

    #[test]
    fn unordered_contours() {
        assert_eq!(
            decode(glyf::UNORDERED_CONTOURS),
            Err(ReadError::MalformedGlyph(
                "contour end points are not increasing"
            ))
        );
    }

    #[test]
    fn truncated_glyphs() {
        assert_eq!(
            decode(glyf::TRUNCATED_COORDINATES),
            Err(ReadError::MalformedGlyph("y coordinates are truncated"))
        );
        // every prefix of a good record fails, and none of them panic
        for len in 0..glyf::SQUARE_WITH_HOLE.len() {
            let result = decode(&glyf::SQUARE_WITH_HOLE[..len]);
            assert!(
                matches!(result, Err(ReadError::MalformedGlyph(_))),
                "prefix of {len} bytes gave {result:?}"
            );
        }
    }

    #[test]
    fn flags_debug() {
        let flags = SimpleGlyphFlags::ON_CURVE_POINT | SimpleGlyphFlags::REPEAT_FLAG;
        assert_eq!(format!("{flags:?}"), "ON_CURVE_POINT | REPEAT_FLAG");
        assert_eq!(
            format!("{:?}", SimpleGlyphFlags::from_bits_retain(0x81)),
            "ON_CURVE_POINT | 0x80"
        );
        assert_eq!(format!("{:?}", SimpleGlyphFlags::empty()), "(empty)");
        assert_eq!(SimpleGlyphFlags::from_bits_truncate(0xFF), SimpleGlyphFlags::all());
    }
}
