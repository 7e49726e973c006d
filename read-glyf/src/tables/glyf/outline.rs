//! Decoded glyph outlines

use alloc::vec::Vec;

use sfnt_types::Point;

use super::SimpleGlyphFlags;

/// The points, flags and contours of a decoded simple glyph.
///
/// Coordinates are absolute, in font units. There is one flag per point, and
/// each entry of `contour_end_indices` is the index of the last point of a
/// contour; the entries strictly increase and the last one is
/// `points.len() - 1`.
///
/// An empty glyph (such as a space) has an empty outline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphOutline {
    pub points: Vec<Point<i32>>,
    pub flags: Vec<SimpleGlyphFlags>,
    pub contour_end_indices: Vec<u16>,
}

/// Point with an associated on-curve flag in a simple glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurvePoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// True if this is an on-curve point.
    pub on_curve: bool,
}

impl CurvePoint {
    /// Construct a new `CurvePoint`
    pub fn new(x: i32, y: i32, on_curve: bool) -> Self {
        Self { x, y, on_curve }
    }

    /// Convenience method to construct an on-curve point
    pub fn on_curve(x: i32, y: i32) -> Self {
        Self::new(x, y, true)
    }

    /// Convenience method to construct an off-curve point
    pub fn off_curve(x: i32, y: i32) -> Self {
        Self::new(x, y, false)
    }
}

impl GlyphOutline {
    /// The number of points in the outline.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The number of contours in the outline.
    pub fn num_contours(&self) -> usize {
        self.contour_end_indices.len()
    }

    /// Returns `true` if the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the point at `index` is on the curve.
    ///
    /// Consecutive off-curve points imply an on-curve point at their
    /// midpoint; reconstructing the quadratic curves is left to the caller.
    pub fn on_curve(&self, index: usize) -> bool {
        self.flags
            .get(index)
            .is_some_and(|flag| flag.contains(SimpleGlyphFlags::ON_CURVE_POINT))
    }

    /// Iterate over the points of each contour.
    pub fn contours(&self) -> impl Iterator<Item = &[Point<i32>]> + '_ {
        let mut start = 0;
        self.contour_end_indices.iter().map(move |end| {
            let end = *end as usize + 1;
            let contour = self.points.get(start..end).unwrap_or_default();
            start = end;
            contour
        })
    }

    /// Iterate over every point along with its on-curve bit.
    pub fn curve_points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, pt)| CurvePoint::new(pt.x, pt.y, self.on_curve(i)))
    }

    /// The points as a flat array of native-endian `i32` pairs.
    ///
    /// This is the layout expected by a vertex buffer of 2D integer points.
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.points.as_slice())
    }
}
