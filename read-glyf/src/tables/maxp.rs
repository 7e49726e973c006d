//! The [maxp (Maximum Profile)](https://learn.microsoft.com/en-us/typography/opentype/spec/maxp) table

use sfnt_types::Tag;

use super::directory::TableRecord;
use crate::{
    read::{HeaderError, ReadError},
    FontData,
};

/// 'maxp'
pub const TAG: Tag = Tag::new(b"maxp");

/// The glyph count follows the 4-byte version.
const NUM_GLYPHS_OFFSET: usize = 4;

/// The only `maxp` field needed for glyph lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Maxp {
    pub num_glyphs: u16,
}

impl Maxp {
    /// Read the glyph count from the `maxp` table at `record`.
    pub fn read(data: FontData, record: &TableRecord) -> Result<Self, ReadError> {
        (record.offset as usize)
            .checked_add(NUM_GLYPHS_OFFSET)
            .ok_or(ReadError::OutOfBounds)
            .and_then(|offset| data.read_at::<u16>(offset))
            .map(|num_glyphs| Maxp { num_glyphs })
            .map_err(|_| ReadError::MalformedHeader(HeaderError::TableTruncated(TAG)))
    }
}
