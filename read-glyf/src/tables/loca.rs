//! The [loca (Index to Location)][loca] table
//!
//! [loca]: https://learn.microsoft.com/en-us/typography/opentype/spec/loca

use alloc::vec::Vec;
use core::ops::Range;

use sfnt_types::{GlyphId, Tag};

use super::{
    directory::{GlyphTables, TableDirectory},
    head::{Head, IndexToLocFormat},
    maxp::Maxp,
};
use crate::{
    read::{HeaderError, ReadError},
    FontData,
};

/// 'loca'
pub const TAG: Tag = Tag::new(b"loca");

/// The absolute location of every glyph record in the font.
///
/// Offsets stored in `loca` are relative to the start of the `glyf` table;
/// the values held here have already had the `glyf` offset added, and are
/// relative to the start of the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphLocations {
    format: IndexToLocFormat,
    offsets: Vec<u32>,
    /// The trailing entry marking the end of the last glyph, if present.
    end: Option<u32>,
}

impl GlyphLocations {
    /// Resolve glyph locations using the `maxp`, `head`, `loca` and `glyf`
    /// records from the directory.
    pub fn resolve(data: FontData, directory: &TableDirectory) -> Result<Self, ReadError> {
        Self::resolve_tables(data, &GlyphTables::new(directory)?)
    }

    /// Resolve glyph locations from tables that have already been looked up.
    pub fn resolve_tables(data: FontData, tables: &GlyphTables) -> Result<Self, ReadError> {
        let num_glyphs = Maxp::read(data, &tables.maxp)?.num_glyphs as usize;
        let format = Head::read(data, &tables.head)?.index_to_loc_format;
        let loca_start = tables.loca.offset as usize;
        let loca = loca_start
            .checked_add(tables.loca.length as usize)
            .and_then(|end| data.slice(loca_start..end))
            .ok_or(ReadError::MalformedHeader(HeaderError::TableTruncated(TAG)))?;
        let reader = EntryReader {
            loca,
            format,
            glyf_start: tables.glyf.offset,
        };
        let offsets = (0..num_glyphs)
            .map(|index| reader.location(index))
            .collect::<Result<Vec<_>, _>>()?;
        // a loca table has num_glyphs + 1 entries, but we tolerate a missing
        // last one. Entries are bounded by the table length so that padding or
        // a following table is never mistaken for it.
        let end = reader.location(num_glyphs).ok();
        if end.is_none() {
            log::debug!("loca has no trailing entry; the last glyph has no known end");
        }
        Ok(GlyphLocations {
            format,
            offsets,
            end,
        })
    }

    pub fn format(&self) -> IndexToLocFormat {
        self.format
    }

    /// The number of glyphs.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The absolute offset of the record for `gid`.
    pub fn get(&self, gid: GlyphId) -> Option<u32> {
        self.offsets.get(gid.to_index()).copied()
    }

    /// The absolute byte range of the record for `gid`.
    ///
    /// The end is unknown (`None`) only for the last glyph, and only when
    /// the table has no trailing entry.
    pub fn extent(&self, gid: GlyphId) -> Option<(u32, Option<u32>)> {
        let index = gid.to_index();
        let start = *self.offsets.get(index)?;
        let end = self.offsets.get(index + 1).copied().or(self.end);
        Some((start, end))
    }

    /// The byte range of `gid`, if both ends are known.
    pub fn range(&self, gid: GlyphId) -> Option<Range<usize>> {
        match self.extent(gid)? {
            (start, Some(end)) if end >= start => Some(start as usize..end as usize),
            _ => None,
        }
    }

    /// Returns `true` if `gid` has no outline, which is signalled by two
    /// consecutive equal entries.
    pub fn is_empty_glyph(&self, gid: GlyphId) -> bool {
        matches!(self.extent(gid), Some((start, Some(end))) if start == end)
    }

    /// Iterate over the absolute offset of each glyph, in glyph order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.offsets.iter().copied()
    }
}

#[derive(Clone, Copy)]
struct EntryReader<'a> {
    loca: FontData<'a>,
    format: IndexToLocFormat,
    glyf_start: u32,
}

impl EntryReader<'_> {
    fn location(&self, index: usize) -> Result<u32, ReadError> {
        let truncated = ReadError::MalformedHeader(HeaderError::TableTruncated(TAG));
        let pos = index
            .checked_mul(self.format.entry_size())
            .ok_or(truncated.clone())?;
        let stored = match self.format {
            IndexToLocFormat::Short => self.loca.read_at::<u16>(pos).map(|off| off as u32 * 2),
            IndexToLocFormat::Long => self.loca.read_at::<u32>(pos),
        }
        .map_err(|_| truncated.clone())?;
        self.glyf_start.checked_add(stored).ok_or(truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyf_test_data::{
        be_buffer, head::head_table, maxp::maxp_table, FontBuilder, GlyfFontBuilder,
    };

    fn locations(font: &[u8]) -> Result<GlyphLocations, ReadError> {
        let data = FontData::new(font);
        GlyphLocations::resolve(data, &TableDirectory::read(data)?)
    }

    fn font_with_loca(format: i16, num_glyphs: u16, loca: &[u8]) -> Vec<u8> {
        FontBuilder::new()
            .add_table(Tag::new(b"head"), head_table(format))
            .add_table(Tag::new(b"maxp"), maxp_table(num_glyphs))
            .add_table(Tag::new(b"loca"), loca)
            .add_table(Tag::new(b"glyf"), vec![0u8; 64])
            .build()
    }

    fn glyf_offset(font: &[u8]) -> u32 {
        let directory = TableDirectory::read(FontData::new(font)).unwrap();
        directory.get(super::super::glyf::TAG).unwrap().offset
    }

    // Short offsets are stored halved; this pins the x2 rule.
    #[test]
    fn short_offsets_are_doubled() {
        let loca = be_buffer! { 0u16, 5u16, 5u16, 12u16 };
        let font = font_with_loca(0, 3, &loca);
        let glyf = glyf_offset(&font);
        let locations = locations(&font).unwrap();
        assert_eq!(locations.format(), IndexToLocFormat::Short);
        assert_eq!(
            locations.iter().collect::<Vec<_>>(),
            [glyf, glyf + 10, glyf + 10]
        );
        assert_eq!(locations.extent(GlyphId::new(2)), Some((glyf + 10, Some(glyf + 24))));
    }

    #[test]
    fn long_offsets_are_direct() {
        let loca = be_buffer! { 0u32, 5u32, 5u32, 12u32 };
        let font = font_with_loca(1, 3, &loca);
        let glyf = glyf_offset(&font);
        let locations = locations(&font).unwrap();
        assert_eq!(locations.format(), IndexToLocFormat::Long);
        assert_eq!(
            locations.iter().collect::<Vec<_>>(),
            [glyf, glyf + 5, glyf + 5]
        );
    }

    #[test]
    fn any_nonzero_format_is_long() {
        let loca = be_buffer! { 0u32, 8u32 };
        let font = font_with_loca(7, 1, &loca);
        assert_eq!(locations(&font).unwrap().format(), IndexToLocFormat::Long);
    }

    #[test]
    fn empty_glyphs() {
        let font = GlyfFontBuilder::new()
            .push_glyph(glyf_test_data::glyf::TRIANGLE)
            .push_glyph(&[])
            .push_glyph(glyf_test_data::glyf::TRIANGLE)
            .push_glyph(&[])
            .build();
        let locations = locations(&font).unwrap();
        assert_eq!(locations.len(), 4);
        let empty = (0..4)
            .map(|gid| locations.is_empty_glyph(GlyphId::new(gid)))
            .collect::<Vec<_>>();
        assert_eq!(empty, [false, true, false, true]);
        assert_eq!(locations.range(GlyphId::new(0)).unwrap().len(), 24);
        assert_eq!(locations.get(GlyphId::new(4)), None);
    }

    #[test]
    fn missing_trailing_entry() {
        let font = GlyfFontBuilder::new()
            .push_glyph(glyf_test_data::glyf::TRIANGLE)
            .push_glyph(&[])
            .omit_final_loca_entry(true)
            .long_loca(true)
            .build();
        let locations = locations(&font).unwrap();
        assert_eq!(locations.len(), 2);
        let start = locations.get(GlyphId::new(1)).unwrap();
        assert_eq!(locations.extent(GlyphId::new(1)), Some((start, None)));
        // without an end we can't tell that it is empty
        assert!(!locations.is_empty_glyph(GlyphId::new(1)));
        assert_eq!(locations.range(GlyphId::new(1)), None);
        assert!(locations.range(GlyphId::new(0)).is_some());
    }

    #[test]
    fn missing_table() {
        let font = FontBuilder::new()
            .add_table(Tag::new(b"head"), head_table(0))
            .add_table(Tag::new(b"loca"), vec![0u8; 4])
            .add_table(Tag::new(b"glyf"), Vec::new())
            .build();
        assert_eq!(
            locations(&font),
            Err(ReadError::MalformedHeader(HeaderError::TableIsMissing(
                Tag::new(b"maxp")
            )))
        );
    }

    #[test]
    fn loca_past_end_of_file() {
        let mut font = font_with_loca(1, 1, &[0, 0, 0, 0, 0, 0, 0, 8]);
        let directory = TableDirectory::read(FontData::new(&font)).unwrap();
        let loca = *directory.get(TAG).unwrap();
        font.truncate(loca.offset as usize + 4);
        assert_eq!(
            locations(&font),
            Err(ReadError::MalformedHeader(HeaderError::TableTruncated(TAG)))
        );
    }

    #[test]
    fn truncated_loca() {
        // three glyphs need at least six bytes of short offsets
        let font = font_with_loca(0, 3, &[0, 0, 0, 2]);
        assert_eq!(
            locations(&font),
            Err(ReadError::MalformedHeader(HeaderError::TableTruncated(TAG)))
        );
    }
}
