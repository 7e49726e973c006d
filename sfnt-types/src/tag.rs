use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use crate::Scalar;

/// A table tag.
///
/// Among the [OpenType data types][data-types], a tag is a 4-byte array
/// where each byte is in the printable ASCII range `(0x20..=0x7E)`.
///
/// Tags read out of a table directory are not validated: fonts in the wild
/// contain invalid tags and these need to be representable. Tags created
/// from user input (such as command line arguments) go through
/// [`Tag::new_checked`].
///
/// [data-types]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#data-types
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Construct a `Tag` from raw bytes.
    ///
    /// This does not perform any validation.
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }

    /// Attempt to create a `Tag` from raw bytes.
    ///
    /// The slice must contain between 1 and 4 bytes, each in the printable
    /// ascii range (`0x20..=0x7E`). Shorter inputs are padded with spaces.
    pub fn new_checked(src: &[u8]) -> Result<Self, InvalidTag> {
        if src.is_empty() || src.len() > 4 {
            return Err(InvalidTag::InvalidLength(src.len()));
        }
        let mut raw = [b' '; 4];
        for (pos, (slot, byte)) in raw.iter_mut().zip(src.iter().copied()).enumerate() {
            match byte {
                b' ' if pos == 0 => return Err(InvalidTag::InvalidByte { pos, byte }),
                0..=0x1F | 0x7F.. => return Err(InvalidTag::InvalidByte { pos, byte }),
                _ => *slot = byte,
            }
        }
        Ok(Tag(raw))
    }

    /// Create a tag from raw big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Return the memory representation of this tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }
}

/// An error representing an invalid tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidTag {
    /// The tag was not between 1 and 4 bytes in length.
    InvalidLength(usize),
    /// The tag contained a byte outside the printable ASCII range, or began
    /// with a space.
    InvalidByte { pos: usize, byte: u8 },
}

impl FromStr for Tag {
    type Err = InvalidTag;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Tag::new_checked(src.as_bytes())
    }
}

impl Scalar for Tag {
    type Raw = [u8; 4];

    fn to_raw(self) -> [u8; 4] {
        self.0
    }

    fn from_raw(raw: [u8; 4]) -> Self {
        Self(raw)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for byte in self.0 {
            if (0x20..=0x7E).contains(&byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "{{0x{byte:02X}}}")?;
            }
        }
        Ok(())
    }
}

impl Display for InvalidTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTag::InvalidByte { pos, byte } => {
                write!(f, "Invalid byte 0x{byte:X} at index {pos}")
            }
            InvalidTag::InvalidLength(len) => write!(f, "Invalid length ({len})"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidTag {}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tag({self})")
    }
}

// serializes to a string; tags which are not utf-8 fail to serialize.
#[cfg(feature = "serde")]
impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        std::str::from_utf8(&self.0)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_constructor() {
        assert!(Tag::new_checked(b"").is_err());
        assert!(Tag::new_checked(b" ").is_err());
        assert!(Tag::new_checked(b"abcde").is_err());
        assert_eq!(Tag::new_checked(b"cvt"), Ok(Tag::new(b"cvt ")));
        assert_eq!("glyf".parse::<Tag>(), Ok(Tag::new(b"glyf")));
        assert_eq!(
            Tag::new_checked(&[b'a', 0x7F]),
            Err(InvalidTag::InvalidByte { pos: 1, byte: 0x7F })
        );
    }

    #[test]
    fn display() {
        let bad_tag = Tag::new(&[0x19, b'z', b'@', 0x7F]);
        assert_eq!(bad_tag.to_string(), "{0x19}z@{0x7F}");
        assert_eq!(format!("{:?}", Tag::new(b"loca")), "Tag(loca)");
    }

    #[test]
    fn scalar_round_trip() {
        let tag = Tag::read(b"maxp").unwrap();
        assert_eq!(tag, Tag::new(b"maxp"));
        assert_eq!(tag.to_raw(), *b"maxp");
    }
}
