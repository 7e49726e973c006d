//! Common [scalar data types][data types] used when reading TrueType outlines
//!
//! [data types]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#data-types

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod glyph_id;
mod point;
mod raw;
mod tag;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use glyph_id::GlyphId;
pub use point::Point;
pub use raw::Scalar;
pub use tag::{InvalidTag, Tag};

/// The sfnt version for fonts containing TrueType outlines.
pub const TT_SFNT_VERSION: u32 = 0x00010000;
/// The sfnt version used by some Apple fonts containing TrueType outlines.
pub const TRUE_SFNT_VERSION: u32 = 0x74727565;
