//! Reading TrueType glyph outlines
//!
//! This crate reads the outlines of simple glyphs from the `glyf` table of a
//! TrueType font. It parses the [table directory][table-directory], resolves
//! the location of each glyph through the `loca` table (using `head` and
//! `maxp` for the offset format and glyph count), and decodes the packed
//! flags and coordinate deltas of a glyph record into absolute points with
//! their contour boundaries.
//!
//! Composite glyphs, hinting instructions and variations are not
//! interpreted; a composite glyph is reported as
//! [`ReadError::UnsupportedGlyphFormat`].
//!
//! Everything here borrows the font data and is immutable once built, so a
//! single [`FontRef`] can be shared by any number of threads.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_glyf::{types::GlyphId, FontRef};
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! let outline = font.outline(GlyphId::new(1)).expect("failed to decode glyph");
//!
//! for (i, contour) in outline.contours().enumerate() {
//!     println!("contour {i} has {} points", contour.len());
//! }
//! ```
//!
//! [table-directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

extern crate alloc;

mod font_data;
mod read;
pub mod tables;

#[cfg(test)]
#[path = "tests/test_font_ref.rs"]
mod tests;

use alloc::vec::Vec;

pub use font_data::{Cursor, FontData};
pub use read::{HeaderError, ReadError};
pub use tables::{
    directory::{GlyphTables, RequiredTable, TableDirectory, TableRecord},
    glyf::{decode_simple_glyph, CurvePoint, GlyphOutline, SimpleGlyphFlags},
    loca::GlyphLocations,
};

/// Public re-export of the sfnt-types crate.
pub extern crate sfnt_types as types;

use types::GlyphId;

/// Reference to an in-memory font, ready for glyph lookup.
///
/// Construction does all of the font-level work up front: the table
/// directory is parsed, the four tables needed for glyph lookup (`glyf`,
/// `loca`, `head` and `maxp`) are checked for, and every glyph's location
/// is resolved. Any failure there is a [`ReadError::MalformedHeader`] and
/// no `FontRef` is produced.
///
/// After that, each glyph is decoded independently; a bad glyph does not
/// affect any other.
#[derive(Clone, Debug)]
pub struct FontRef<'a> {
    data: FontData<'a>,
    table_directory: TableDirectory,
    tables: GlyphTables,
    locations: GlyphLocations,
}

impl<'a> FontRef<'a> {
    /// Creates a new reference to an in-memory font backed by the given data.
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        let data = FontData::new(data);
        let table_directory = TableDirectory::read(data)?;
        let tables = GlyphTables::new(&table_directory)?;
        let locations = GlyphLocations::resolve_tables(data, &tables)?;
        Ok(FontRef {
            data,
            table_directory,
            tables,
            locations,
        })
    }

    /// Returns the underlying font data.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// Returns the associated table directory.
    pub fn table_directory(&self) -> &TableDirectory {
        &self.table_directory
    }

    /// Returns the records of the tables used for glyph lookup.
    pub fn glyph_tables(&self) -> &GlyphTables {
        &self.tables
    }

    /// Returns the resolved glyph locations.
    pub fn glyph_locations(&self) -> &GlyphLocations {
        &self.locations
    }

    /// The number of glyphs in the font, from `maxp`.
    pub fn num_glyphs(&self) -> u16 {
        // a u16 was read to build the locations
        self.locations.len() as u16
    }

    /// The absolute offset of the glyph record for `gid`, or `None` if the
    /// glyph id is out of range.
    pub fn glyph_location(&self, gid: GlyphId) -> Option<u32> {
        self.locations.get(gid)
    }

    /// Decode the outline of a single glyph.
    ///
    /// A glyph with no data (such as a space) returns an empty outline
    /// without reading `glyf`. A glyph id past the end of the font is
    /// [`ReadError::OutOfBounds`].
    pub fn outline(&self, gid: GlyphId) -> Result<GlyphOutline, ReadError> {
        let offset = self.locations.get(gid).ok_or(ReadError::OutOfBounds)?;
        if self.locations.is_empty_glyph(gid) {
            return Ok(GlyphOutline::default());
        }
        decode_simple_glyph(self.data, offset as usize)
    }

    /// Decode every glyph in the font, in glyph order.
    ///
    /// Each item is the result for one glyph, so the caller decides whether
    /// to skip or stop at a glyph that fails.
    pub fn outlines(
        &self,
    ) -> impl Iterator<Item = (GlyphId, Result<GlyphOutline, ReadError>)> + '_ {
        (0..self.num_glyphs())
            .map(GlyphId::new)
            .map(|gid| (gid, self.outline(gid)))
    }

    /// Decode every glyph in the font, substituting an empty outline for
    /// any glyph that fails.
    ///
    /// Each failure is logged at the `warn` level.
    pub fn outlines_lossy(&self) -> Vec<GlyphOutline> {
        self.outlines()
            .map(|(gid, result)| {
                result.unwrap_or_else(|err| {
                    log::warn!("substituting an empty outline for {gid}: {err}");
                    GlyphOutline::default()
                })
            })
            .collect()
    }
}
