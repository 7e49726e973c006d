//! Errors that occur while reading font data

use sfnt_types::Tag;

/// An error that occurs when reading font data
///
/// Every operation in this crate either succeeds completely or returns the
/// first error it encountered; nothing is retried and no partial results
/// are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A read or seek went past the end of the data.
    OutOfBounds,
    /// The table directory, or one of the tables needed to locate glyphs,
    /// is missing or malformed. This is fatal for the whole font.
    MalformedHeader(HeaderError),
    /// The data for a single glyph could not be decoded. Other glyphs in
    /// the font may still decode.
    MalformedGlyph(&'static str),
    /// The glyph is a composite glyph, which we do not decode. Carries the
    /// (negative) contour count that was read.
    UnsupportedGlyphFormat(i16),
}

/// The specific problem behind a [`ReadError::MalformedHeader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// The table directory runs past the end of the data.
    DirectoryTruncated,
    /// A table required for glyph lookup is not in the directory.
    TableIsMissing(Tag),
    /// A read inside this table ran past the end of the data.
    TableTruncated(Tag),
}

impl ReadError {
    /// Returns `true` if this error affects only one glyph.
    ///
    /// Callers decoding a whole font can use this to decide whether to skip
    /// the glyph or give up.
    pub fn is_glyph_error(&self) -> bool {
        matches!(
            self,
            ReadError::MalformedGlyph(_) | ReadError::UnsupportedGlyphFormat(_)
        )
    }
}

impl From<HeaderError> for ReadError {
    fn from(src: HeaderError) -> ReadError {
        ReadError::MalformedHeader(src)
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::MalformedHeader(err) => write!(f, "Malformed header: {err}"),
            ReadError::MalformedGlyph(msg) => write!(f, "Malformed glyph: '{msg}'"),
            ReadError::UnsupportedGlyphFormat(n) => {
                write!(f, "Composite glyph ({n} contours) is not supported")
            }
        }
    }
}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HeaderError::DirectoryTruncated => write!(f, "the table directory is truncated"),
            HeaderError::TableIsMissing(tag) => write!(f, "the {tag} table is missing"),
            HeaderError::TableTruncated(tag) => write!(f, "the {tag} table is truncated"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
