//! selecting glyphs by id

use std::{ops::RangeInclusive, str::FromStr};

use read_glyf::types::GlyphId;

/// A set of glyph ids, written as comma separated ids and ranges.
///
/// `3`, `0-9` and `100-` (everything from 100 on) are all valid elements;
/// an empty query selects every glyph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphQuery {
    ranges: Vec<RangeInclusive<u16>>,
}

impl GlyphQuery {
    /// Every selected glyph id that exists in a font with `num_glyphs` glyphs,
    /// in the order they were asked for.
    pub fn glyph_ids(&self, num_glyphs: u16) -> Vec<GlyphId> {
        let all = 0..=u16::MAX;
        let ranges = if self.ranges.is_empty() {
            std::slice::from_ref(&all)
        } else {
            self.ranges.as_slice()
        };
        ranges
            .iter()
            .flat_map(move |range| {
                let end = (*range.end()).min(num_glyphs.saturating_sub(1));
                let range = if num_glyphs == 0 { 1..=0 } else { *range.start()..=end };
                range.map(GlyphId::new)
            })
            .collect()
    }
}

impl FromStr for GlyphQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_id = |raw: &str| {
            raw.trim()
                .parse::<u16>()
                .map_err(|_| format!("invalid glyph id '{}'", raw.escape_default()))
        };
        let ranges = s
            .split(',')
            .filter(|element| !element.trim().is_empty())
            .map(|element| match element.split_once('-') {
                None => parse_id(element).map(|id| id..=id),
                Some((start, end)) if end.trim().is_empty() => {
                    parse_id(start).map(|start| start..=u16::MAX)
                }
                Some((start, end)) => {
                    let (start, end) = (parse_id(start)?, parse_id(end)?);
                    if start > end {
                        Err(format!("empty glyph range '{element}'"))
                    } else {
                        Ok(start..=end)
                    }
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GlyphQuery { ranges })
    }
}
