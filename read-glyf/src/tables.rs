//! The font tables needed to find and decode glyph outlines

pub mod directory;
pub mod glyf;
pub mod head;
pub mod loca;
pub mod maxp;
