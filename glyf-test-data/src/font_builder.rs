//! Assemble synthetic font files.

use sfnt_types::{Tag, TT_SFNT_VERSION};

use crate::{be_buffer, bebuffer::BeBuffer, head::head_table, maxp::maxp_table};

const TABLE_RECORD_LEN: usize = 16;
const DIRECTORY_HEADER_LEN: usize = 12;

/// Builds an sfnt file from a list of tables.
///
/// Tables are written in insertion order, each padded to a four byte
/// boundary; the directory lists them in the same order. Duplicate tags are
/// written as given.
#[derive(Debug, Clone, Default)]
pub struct FontBuilder {
    tables: Vec<(Tag, Vec<u8>)>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_table(&mut self, tag: Tag, data: impl Into<Vec<u8>>) -> &mut Self {
        self.tables.push((tag, data.into()));
        self
    }

    /// The offset the table at `index` will be written to.
    pub fn table_offset(&self, index: usize) -> u32 {
        let start = DIRECTORY_HEADER_LEN + TABLE_RECORD_LEN * self.tables.len();
        let preceding: usize = self.tables[..index]
            .iter()
            .map(|(_, data)| data.len().next_multiple_of(4))
            .sum();
        (start + preceding) as u32
    }

    pub fn build(&self) -> Vec<u8> {
        let num_tables = self.tables.len() as u16;
        let entry_selector = num_tables.checked_ilog2().unwrap_or(0) as u16;
        let search_range = (1u16 << entry_selector) * 16;
        let range_shift = (num_tables * 16).saturating_sub(search_range);

        let mut buf = be_buffer! {
            TT_SFNT_VERSION,
            num_tables,
            search_range,
            entry_selector,
            range_shift
        };
        for (i, (tag, data)) in self.tables.iter().enumerate() {
            buf = buf
                .push(*tag)
                .push(0u32) // checksum
                .push(self.table_offset(i))
                .push(data.len() as u32);
        }
        for (_, data) in &self.tables {
            buf = buf.extend_from_slice(data).align_to(4);
        }
        buf.into_vec()
    }
}

/// Builds a font with `head`, `maxp`, `loca` and `glyf` tables from a list
/// of raw glyph records.
#[derive(Debug, Clone, Default)]
pub struct GlyfFontBuilder {
    glyphs: Vec<Vec<u8>>,
    long_loca: bool,
    omit_final_loca_entry: bool,
}

impl GlyfFontBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Append a glyph record; an empty slice adds a glyph with no outline.
    pub fn push_glyph(&mut self, record: &[u8]) -> &mut Self {
        self.glyphs.push(record.to_vec());
        self
    }

    /// Write 4-byte `loca` entries (`indexToLocFormat` 1).
    pub fn long_loca(&mut self, long: bool) -> &mut Self {
        self.long_loca = long;
        self
    }

    /// Leave out the trailing `loca` entry that marks the end of the last glyph.
    pub fn omit_final_loca_entry(&mut self, omit: bool) -> &mut Self {
        self.omit_final_loca_entry = omit;
        self
    }

    /// The `glyf` table followed by the `loca` table.
    pub fn glyf_and_loca(&self) -> (Vec<u8>, Vec<u8>) {
        let mut glyf = BeBuffer::new();
        let mut offsets = vec![0u32];
        for record in &self.glyphs {
            // short offsets are stored halved, so every record starts on an even byte
            glyf = glyf.extend_from_slice(record).align_to(2);
            offsets.push(glyf.len() as u32);
        }
        if self.omit_final_loca_entry {
            offsets.pop();
        }
        let loca = if self.long_loca {
            BeBuffer::new().extend(offsets)
        } else {
            BeBuffer::new().extend(offsets.into_iter().map(|off| (off / 2) as u16))
        };
        (glyf.into_vec(), loca.into_vec())
    }

    pub fn build(&self) -> Vec<u8> {
        let (glyf, loca) = self.glyf_and_loca();
        FontBuilder::new()
            .add_table(Tag::new(b"head"), head_table(self.long_loca as i16))
            .add_table(Tag::new(b"maxp"), maxp_table(self.glyphs.len() as u16))
            .add_table(Tag::new(b"loca"), loca)
            .add_table(Tag::new(b"glyf"), glyf)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_layout() {
        let font = FontBuilder::new()
            .add_table(Tag::new(b"abcd"), [1u8, 2, 3])
            .add_table(Tag::new(b"efgh"), [4u8])
            .build();
        // header + two records + two padded tables
        assert_eq!(font.len(), 12 + 32 + 4 + 4);
        assert_eq!(&font[4..6], &[0, 2]);
        // second record's offset field
        assert_eq!(&font[12 + 16 + 8..12 + 16 + 12], &48u32.to_be_bytes());
        assert_eq!(font[48], 4);
    }

    #[test]
    fn short_loca_is_halved() {
        let (glyf, loca) = GlyfFontBuilder::new()
            .push_glyph(&[1, 2, 3])
            .push_glyph(&[])
            .glyf_and_loca();
        assert_eq!(glyf.len(), 4);
        assert_eq!(loca, [0, 0, 0, 2, 0, 2]);
    }
}
