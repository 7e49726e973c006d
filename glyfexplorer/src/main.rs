//! Print the table directory and glyph outlines of a TrueType font.
//!
//! By default every glyph is printed; `--glyphs` selects a subset and
//! `--json` switches to machine-readable output.

use std::io::Write;

use read_glyf::{types::GlyphId, FontRef, GlyphOutline};
use serde::Serialize;

mod print;
mod query;

use print::PrettyPrinter;
use query::GlyphQuery;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| Error(e.to_string()))?;
    let bytes = std::fs::read(&args.input)
        .map_err(|e| Error(format!("failed to read {}: {e}", args.input.display())))?;
    let font = FontRef::new(&bytes).map_err(Error::new)?;
    log::debug!(
        "{} tables, {} glyphs",
        font.table_directory().len(),
        font.num_glyphs()
    );

    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    if args.list {
        return PrettyPrinter::new(&mut locked)
            .print_directory(font.table_directory())
            .map_err(Error::new);
    }

    let glyphs = args
        .glyphs
        .unwrap_or_default()
        .glyph_ids(font.num_glyphs());
    if args.json {
        print_json(&font, &glyphs, &mut locked)
    } else {
        let mut printer = PrettyPrinter::new(&mut locked);
        glyphs
            .iter()
            .try_for_each(|gid| printer.print_glyph(*gid, &font.outline(*gid)))
            .map_err(Error::new)
    }
}

/// One entry of the `--json` output.
#[derive(Serialize)]
struct GlyphRecord {
    gid: GlyphId,
    #[serde(skip_serializing_if = "Option::is_none")]
    outline: Option<GlyphOutline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl GlyphRecord {
    fn new(font: &FontRef, gid: GlyphId) -> Self {
        match font.outline(gid) {
            Ok(outline) => GlyphRecord {
                gid,
                outline: Some(outline),
                error: None,
            },
            Err(err) => GlyphRecord {
                gid,
                outline: None,
                error: Some(err.to_string()),
            },
        }
    }
}

fn print_json(font: &FontRef, glyphs: &[GlyphId], writer: &mut impl Write) -> Result<(), Error> {
    let records = glyphs
        .iter()
        .map(|gid| GlyphRecord::new(font, *gid))
        .collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *writer, &records).map_err(Error::new)?;
    writeln!(writer).map_err(Error::new)
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use super::GlyphQuery;
    use std::path::PathBuf;

    xflags::xflags! {
        /// Print glyph outlines from a TrueType font
        cmd args {
            required input: PathBuf
            /// List the table directory and exit
            optional -l, --list
            /// Glyph ids to print, such as `0-9,42,100-`
            optional -g, --glyphs glyphs: GlyphQuery
            /// Print outlines as JSON
            optional -j, --json
        }
    }
}
