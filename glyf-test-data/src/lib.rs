//! test data shared between the crates in this workspace.

pub mod bebuffer;
pub mod font_builder;
pub mod glyf;

pub use font_builder::{FontBuilder, GlyfFontBuilder};

pub mod head {
    /// Byte position of `indexToLocFormat` within the `head` table.
    pub const INDEX_TO_LOC_FORMAT_OFFSET: usize = 50;

    /// A minimal 54-byte `head` table with the given `indexToLocFormat`.
    #[rustfmt::skip]
    pub fn head_table(index_to_loc_format: i16) -> Vec<u8> {
        let mut table = vec![
            0x00, 0x01, 0x00, 0x00, // version 1.0
            0x00, 0x01, 0x00, 0x00, // fontRevision 1.0
            0x00, 0x00, 0x00, 0x00, // checksumAdjustment
            0x5F, 0x0F, 0x3C, 0xF5, // magicNumber
            0x00, 0x00,             // flags
            0x04, 0x00,             // unitsPerEm 1024
            0x00, 0x00, 0x00, 0x00, // created
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, // modified
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, // xMin, yMin
            0x00, 0x64, 0x00, 0x64, // xMax, yMax
            0x00, 0x00,             // macStyle
            0x00, 0x08,             // lowestRecPPEM
            0x00, 0x02,             // fontDirectionHint
        ];
        assert_eq!(table.len(), INDEX_TO_LOC_FORMAT_OFFSET);
        table.extend_from_slice(&index_to_loc_format.to_be_bytes());
        table.extend_from_slice(&[0x00, 0x00]); // glyphDataFormat
        table
    }
}

pub mod maxp {
    /// A version 0.5 `maxp` table, which is just the version and glyph count.
    pub fn maxp_table(num_glyphs: u16) -> Vec<u8> {
        let mut table = vec![0x00, 0x00, 0x50, 0x00];
        table.extend_from_slice(&num_glyphs.to_be_bytes());
        table
    }
}
