//! The [head (Font Header)](https://learn.microsoft.com/en-us/typography/opentype/spec/head) table

use sfnt_types::Tag;

use super::directory::TableRecord;
use crate::{
    read::{HeaderError, ReadError},
    FontData,
};

/// 'head'
pub const TAG: Tag = Tag::new(b"head");

/// Byte offset of `indexToLocFormat`, past the version, revision, checksum
/// adjustment, magic number, flags, units per em, dates, bounds, mac style,
/// lowest ppem and direction hint.
const INDEX_TO_LOC_FORMAT_OFFSET: usize = 50;

/// The format of the offsets stored in the `loca` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexToLocFormat {
    /// 16-bit entries holding half the actual offset.
    Short,
    /// 32-bit entries holding the offset directly.
    Long,
}

impl IndexToLocFormat {
    /// Zero means short offsets; anything else means long offsets.
    pub fn new(raw: i16) -> Self {
        if raw == 0 {
            Self::Short
        } else {
            Self::Long
        }
    }

    /// The size of a single `loca` entry, in bytes.
    pub fn entry_size(self) -> usize {
        match self {
            Self::Short => 2,
            Self::Long => 4,
        }
    }
}

/// The only `head` field needed for glyph lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Head {
    pub index_to_loc_format: IndexToLocFormat,
}

impl Head {
    /// Read the `loca` format from the `head` table at `record`.
    pub fn read(data: FontData, record: &TableRecord) -> Result<Self, ReadError> {
        let truncated = || ReadError::MalformedHeader(HeaderError::TableTruncated(TAG));
        let mut cursor = data.cursor_at(record.offset as usize).map_err(|_| truncated())?;
        cursor
            .skip(INDEX_TO_LOC_FORMAT_OFFSET)
            .and_then(|_| cursor.read::<i16>())
            .map(|raw| Head {
                index_to_loc_format: IndexToLocFormat::new(raw),
            })
            .map_err(|_| truncated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyf_test_data::head::head_table;

    fn record_for(offset: u32, len: usize) -> TableRecord {
        TableRecord {
            tag: TAG,
            checksum: 0,
            offset,
            length: len as u32,
        }
    }

    #[test]
    fn loc_format() {
        for (raw, expected) in [
            (0, IndexToLocFormat::Short),
            (1, IndexToLocFormat::Long),
            (-1, IndexToLocFormat::Long),
        ] {
            let table = head_table(raw);
            let head = Head::read(FontData::new(&table), &record_for(0, table.len())).unwrap();
            assert_eq!(head.index_to_loc_format, expected);
        }
        assert_eq!(IndexToLocFormat::Short.entry_size(), 2);
        assert_eq!(IndexToLocFormat::Long.entry_size(), 4);
    }

    #[test]
    fn truncated() {
        let table = head_table(1);
        let data = FontData::new(&table[..51]);
        assert_eq!(
            Head::read(data, &record_for(0, 51)),
            Err(ReadError::MalformedHeader(HeaderError::TableTruncated(TAG)))
        );
        assert_eq!(
            Head::read(FontData::new(&table), &record_for(1000, 54)),
            Err(ReadError::MalformedHeader(HeaderError::TableTruncated(TAG)))
        );
    }
}
