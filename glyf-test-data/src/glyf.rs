//! Raw `glyf` records for scenarios that are easier to spell out by hand.
//!
//! <https://learn.microsoft.com/en-us/typography/opentype/spec/glyf#simple-glyph-description>

/// One contour, three on-curve points, every delta stored as a short.
///
/// Deltas are `(10, 0), (0, 10), (-10, -10)`, so the absolute points are
/// `(10, 0), (10, 10), (0, 0)`.
#[rustfmt::skip]
pub static TRIANGLE: &[u8] = &[
    0x00, 0x01,             // numberOfContours 1
    0x00, 0x00, 0x00, 0x00, // xMin, yMin
    0x00, 0x0A, 0x00, 0x0A, // xMax, yMax
    0x00, 0x02,             // endPtsOfContours[0] 2
    0x00, 0x00,             // instructionLength 0
    0x37,                   // on curve, x short +, y short +
    0x37,                   // on curve, x short +, y short +
    0x07,                   // on curve, x short -, y short -
    0x0A, 0x00, 0x0A,       // x deltas 10, 0, -10
    0x00, 0x0A, 0x0A,       // y deltas 0, 10, -10
];

/// A square with a square hole.
///
/// Exercises the repeat flag, 16-bit deltas, "same as previous" deltas
/// and a non-empty instruction block. The absolute points are
/// `(0, 0), (300, 0), (300, 300), (0, 300)` for the outer contour and
/// `(100, 200), (200, 200), (200, 100), (100, 100)` for the hole.
#[rustfmt::skip]
pub static SQUARE_WITH_HOLE: &[u8] = &[
    0x00, 0x02,             // numberOfContours 2
    0x00, 0x00, 0x00, 0x00, // xMin, yMin
    0x01, 0x2C, 0x01, 0x2C, // xMax 300, yMax 300
    0x00, 0x03,             // endPtsOfContours[0] 3
    0x00, 0x07,             // endPtsOfContours[1] 7
    0x00, 0x03,             // instructionLength 3
    0xB0, 0x01, 0x2C,       // PUSHB[0] 1, CALL
    // flags
    0x31,                   // p0: on, x same, y same
    0x21,                   // p1: on, x long, y same
    0x11,                   // p2: on, x same, y long
    0x21,                   // p3: on, x long, y same
    0x1F, 0x02,             // p4..p6: on, x short +, y short -, repeated 2 more times
    0x23,                   // p7: on, x short -, y same
    // x coordinates
    0x01, 0x2C,             // p1 +300
    0xFE, 0xD4,             // p3 -300
    0x64,                   // p4 +100
    0x64,                   // p5 +100
    0x00,                   // p6 +0
    0x64,                   // p7 -100
    // y coordinates
    0x01, 0x2C,             // p2 +300
    0x64,                   // p4 -100
    0x00,                   // p5 -0
    0x64,                   // p6 -100
];

/// The header of a composite glyph: a negative contour count.
#[rustfmt::skip]
pub static COMPOSITE: &[u8] = &[
    0xFF, 0xFF,             // numberOfContours -1
    0x00, 0x00, 0x00, 0x00, // xMin, yMin
    0x00, 0x0A, 0x00, 0x0A, // xMax, yMax
    0x00, 0x23,             // flags: ARG_1_AND_2_ARE_WORDS | ARGS_ARE_XY_VALUES | MORE_COMPONENTS
    0x00, 0x01,             // glyphIndex 1
    0x00, 0x00, 0x00, 0x00, // dx, dy
];

/// A glyph whose repeat count runs past the number of points.
#[rustfmt::skip]
pub static OVERLONG_REPEAT: &[u8] = &[
    0x00, 0x01,             // numberOfContours 1
    0x00, 0x00, 0x00, 0x00, // xMin, yMin
    0x00, 0x00, 0x00, 0x00, // xMax, yMax
    0x00, 0x02,             // endPtsOfContours[0] 2
    0x00, 0x00,             // instructionLength 0
    0x39, 0x05,             // on curve, x same, y same, repeated 5 more times
];

/// A glyph whose contour end points go backwards.
#[rustfmt::skip]
pub static UNORDERED_CONTOURS: &[u8] = &[
    0x00, 0x02,             // numberOfContours 2
    0x00, 0x00, 0x00, 0x00, // xMin, yMin
    0x00, 0x00, 0x00, 0x00, // xMax, yMax
    0x00, 0x04,             // endPtsOfContours[0] 4
    0x00, 0x02,             // endPtsOfContours[1] 2
    0x00, 0x00,             // instructionLength 0
    0x31, 0x31, 0x31, 0x31, 0x31,
];

/// A glyph whose y coordinates are cut short.
#[rustfmt::skip]
pub static TRUNCATED_COORDINATES: &[u8] = &[
    0x00, 0x01,             // numberOfContours 1
    0x00, 0x00, 0x00, 0x00, // xMin, yMin
    0x00, 0x00, 0x00, 0x00, // xMax, yMax
    0x00, 0x01,             // endPtsOfContours[0] 1
    0x00, 0x00,             // instructionLength 0
    0x01, 0x01,             // on curve, x long, y long
    0x00, 0x01, 0x00, 0x02, // x deltas 1, 2
    0x00, 0x03,             // y delta 3, second one missing
];
