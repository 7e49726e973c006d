//! pretty printing of the table directory and glyph outlines

use std::fmt::Display;

use ansi_term::{Color, Style};
use read_glyf::{types::GlyphId, GlyphOutline, ReadError, TableDirectory};

const INDENT: &str = "  ";

pub struct PrettyPrinter<'a> {
    is_tty: bool,
    writer: &'a mut (dyn std::io::Write + 'a),
}

impl<'a> PrettyPrinter<'a> {
    pub fn new(writer: &'a mut (dyn std::io::Write + 'a)) -> Self {
        PrettyPrinter {
            is_tty: atty::is(atty::Stream::Stdout),
            writer,
        }
    }

    /// A printer that never emits escape codes.
    #[cfg(test)]
    fn plain(writer: &'a mut (dyn std::io::Write + 'a)) -> Self {
        PrettyPrinter {
            is_tty: false,
            writer,
        }
    }

    fn styled(&mut self, style: Style, item: impl Display) -> std::io::Result<()> {
        if self.is_tty {
            write!(self.writer, "{}", style.paint(item.to_string()))
        } else {
            write!(self.writer, "{item}")
        }
    }

    pub fn print_directory(&mut self, directory: &TableDirectory) -> std::io::Result<()> {
        writeln!(self.writer, "sfnt version 0x{:08X}", directory.sfnt_version())?;
        writeln!(self.writer, "Tag  Offset  Length  Checksum")?;
        writeln!(self.writer, "-------------------------------")?;

        let offset_pad = hex_width(directory.iter().map(|rec| rec.offset).max());
        for record in directory.iter() {
            writeln!(
                self.writer,
                "{0} 0x{1:02$X} {3:8} 0x{4:08X} ",
                record.tag, record.offset, offset_pad, record.length, record.checksum
            )?;
        }
        Ok(())
    }

    pub fn print_glyph(
        &mut self,
        gid: GlyphId,
        outline: &Result<GlyphOutline, ReadError>,
    ) -> std::io::Result<()> {
        self.styled(Style::new().bold(), gid)?;
        let outline = match outline {
            Ok(outline) => outline,
            Err(err) => {
                write!(self.writer, ": ")?;
                self.styled(Color::Red.normal(), format_args!("error '{err}'"))?;
                return writeln!(self.writer);
            }
        };
        writeln!(
            self.writer,
            ": {} contours, {} points",
            outline.num_contours(),
            outline.num_points()
        )?;
        for (i, contour) in outline.contours().enumerate() {
            writeln!(self.writer, "{INDENT}contour {i}")?;
            let first = contour_start(outline, i);
            for (j, point) in contour.iter().enumerate() {
                write!(self.writer, "{INDENT}{INDENT}({}, {}) ", point.x, point.y)?;
                if outline.on_curve(first + j) {
                    self.styled(Color::Green.normal(), "on")?;
                } else {
                    self.styled(Style::new().dimmed(), "off")?;
                }
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }
}

fn contour_start(outline: &GlyphOutline, contour: usize) -> usize {
    contour
        .checked_sub(1)
        .and_then(|prev| outline.contour_end_indices.get(prev))
        .map(|end| *end as usize + 1)
        .unwrap_or(0)
}

// pick how much padding we use for offsets based on the max offset in directory
fn hex_width(max_offset: Option<u32>) -> usize {
    match max_offset.unwrap_or_default() {
        0..=0xffff => 4usize,
        0x10000..=0xffff_ff => 6,
        0x1000000.. => 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyf_test_data::{glyf, GlyfFontBuilder};
    use read_glyf::FontRef;

    fn render(f: impl FnOnce(&mut PrettyPrinter) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut PrettyPrinter::plain(&mut buf)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn print_outline() {
        let data = GlyfFontBuilder::new()
            .push_glyph(glyf::TRIANGLE)
            .push_glyph(glyf::COMPOSITE)
            .build();
        let font = FontRef::new(&data).unwrap();
        let text = render(|printer| {
            font.outlines()
                .try_for_each(|(gid, outline)| printer.print_glyph(gid, &outline))
        });
        assert_eq!(
            text,
            "GID_0: 1 contours, 3 points\n  contour 0\n    (10, 0) on\n    (10, 10) on\n    (0, 0) on\n\
             GID_1: error 'Composite glyph (-1 contours) is not supported'\n"
        );
    }

    #[test]
    fn print_directory() {
        let data = GlyfFontBuilder::new().push_glyph(glyf::TRIANGLE).build();
        let font = FontRef::new(&data).unwrap();
        let text = render(|printer| printer.print_directory(font.table_directory()));
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "sfnt version 0x00010000");
        assert_eq!(lines.len(), 3 + 4);
        // ordered by tag
        assert!(lines[3].starts_with("glyf 0x"));
        assert!(lines[6].starts_with("maxp 0x"));
    }

    #[test]
    fn offset_width() {
        assert_eq!(hex_width(None), 4);
        assert_eq!(hex_width(Some(0x12345)), 6);
        assert_eq!(hex_width(Some(u32::MAX)), 8);
    }
}
