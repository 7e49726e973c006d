//! raw font bytes

use sfnt_types::Scalar;

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for reading big-endian values out of that data. It is `Copy`, and every
/// reader borrows it independently, so a single font can be decoded from
/// any number of threads at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A cursor for reading sequential big-endian values.
///
/// The cursor owns nothing but its position; the bytes underneath are
/// never copied or modified. A read or skip that would run past the end of
/// the data fails with [`ReadError::OutOfBounds`] and leaves the position
/// unchanged.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `self[range]`, or `None` if it is out of bounds.
    pub fn slice(&self, range: core::ops::Range<usize>) -> Option<FontData<'a>> {
        self.bytes.get(range).map(FontData::new)
    }

    /// Read a scalar at an absolute offset.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        let end = offset
            .checked_add(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Returns a cursor positioned at the start of the data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    /// Returns a cursor positioned at `offset`.
    pub fn cursor_at(&self, offset: usize) -> Result<Cursor<'a>, ReadError> {
        let mut cursor = self.cursor();
        cursor.seek(offset)?;
        Ok(cursor)
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    /// Read a big-endian scalar and advance past it.
    ///
    /// This covers every fixed-width field in the tables we read: `u8`,
    /// `i16`, `u16`, `u32`, tags and flag bytes.
    pub fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let value = self.data.read_at(self.pos)?;
        self.pos += T::RAW_BYTE_LEN;
        Ok(value)
    }

    /// Advance by `n_bytes` without reading them.
    pub fn skip(&mut self, n_bytes: usize) -> Result<(), ReadError> {
        let pos = self
            .pos
            .checked_add(n_bytes)
            .ok_or(ReadError::OutOfBounds)?;
        self.seek(pos)
    }

    /// Move to an absolute position.
    ///
    /// Seeking to exactly the end of the data is allowed; the next read
    /// will fail.
    pub fn seek(&mut self, pos: usize) -> Result<(), ReadError> {
        if pos > self.data.len() {
            return Err(ReadError::OutOfBounds);
        }
        self.pos = pos;
        Ok(())
    }

    /// The current absolute position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes between the current position and the end.
    pub fn remaining_bytes(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}
