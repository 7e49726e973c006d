//! The [table directory][directory] at the start of an sfnt file
//!
//! [directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory

use alloc::collections::BTreeMap;

use sfnt_types::Tag;

use super::{glyf, head, loca, maxp};
use crate::{
    font_data::{Cursor, FontData},
    read::{HeaderError, ReadError},
};

/// A single record in the table directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    pub tag: Tag,
    /// Read for display only; we never verify it.
    pub checksum: u32,
    /// Offset of the table from the start of the file.
    pub offset: u32,
    pub length: u32,
}

/// The table directory: a map from tag to [`TableRecord`].
///
/// If a tag appears more than once, the last record wins.
#[derive(Clone, Debug, Default)]
pub struct TableDirectory {
    sfnt_version: u32,
    records: BTreeMap<Tag, TableRecord>,
}

impl TableDirectory {
    /// Parse the directory from the start of the font data.
    ///
    /// This is all-or-nothing: if any record runs past the end of the data
    /// no directory is returned.
    pub fn read(data: FontData) -> Result<Self, ReadError> {
        Self::read_impl(&mut data.cursor())
            .map_err(|_| ReadError::MalformedHeader(HeaderError::DirectoryTruncated))
    }

    fn read_impl(cursor: &mut Cursor) -> Result<Self, ReadError> {
        let sfnt_version = cursor.read::<u32>()?;
        let num_tables = cursor.read::<u16>()?;
        // searchRange, entrySelector, rangeShift
        cursor.skip(6)?;
        let mut records = BTreeMap::new();
        for _ in 0..num_tables {
            let record = TableRecord {
                tag: cursor.read()?,
                checksum: cursor.read()?,
                offset: cursor.read()?,
                length: cursor.read()?,
            };
            if let Some(prev) = records.insert(record.tag, record) {
                log::debug!(
                    "duplicate '{}' record at offset {} replaces the one at {}",
                    record.tag,
                    record.offset,
                    prev.offset
                );
            }
        }
        Ok(TableDirectory {
            sfnt_version,
            records,
        })
    }

    /// The 4-byte scaler type at the start of the file.
    pub fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    /// The number of distinct tags in the directory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for `tag`.
    ///
    /// An absent tag is a [`HeaderError::TableIsMissing`].
    pub fn get(&self, tag: Tag) -> Result<&TableRecord, ReadError> {
        self.records
            .get(&tag)
            .ok_or(ReadError::MalformedHeader(HeaderError::TableIsMissing(tag)))
    }

    /// Returns `true` if the directory has a record for `tag`.
    pub fn contains(&self, tag: Tag) -> bool {
        self.records.contains_key(&tag)
    }

    /// Iterate over the records, ordered by tag.
    pub fn iter(&self) -> impl Iterator<Item = &TableRecord> + '_ {
        self.records.values()
    }
}

/// The tables we need in order to find and decode glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequiredTable {
    Glyf,
    Loca,
    Head,
    Maxp,
}

impl RequiredTable {
    pub const ALL: [RequiredTable; 4] = [
        RequiredTable::Glyf,
        RequiredTable::Loca,
        RequiredTable::Head,
        RequiredTable::Maxp,
    ];

    pub const fn tag(self) -> Tag {
        match self {
            RequiredTable::Glyf => glyf::TAG,
            RequiredTable::Loca => loca::TAG,
            RequiredTable::Head => head::TAG,
            RequiredTable::Maxp => maxp::TAG,
        }
    }
}

/// The records of the four [required tables](RequiredTable), looked up once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphTables {
    pub glyf: TableRecord,
    pub loca: TableRecord,
    pub head: TableRecord,
    pub maxp: TableRecord,
}

impl GlyphTables {
    /// Look up every required table, failing on the first that is absent.
    pub fn new(directory: &TableDirectory) -> Result<Self, ReadError> {
        let [glyf, loca, head, maxp] = RequiredTable::ALL;
        Ok(GlyphTables {
            glyf: *directory.get(glyf.tag())?,
            loca: *directory.get(loca.tag())?,
            head: *directory.get(head.tag())?,
            maxp: *directory.get(maxp.tag())?,
        })
    }

    /// The record for one of the required tables.
    pub fn get(&self, table: RequiredTable) -> &TableRecord {
        match table {
            RequiredTable::Glyf => &self.glyf,
            RequiredTable::Loca => &self.loca,
            RequiredTable::Head => &self.head,
            RequiredTable::Maxp => &self.maxp,
        }
    }
}
