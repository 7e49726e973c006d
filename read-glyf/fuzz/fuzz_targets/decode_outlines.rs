#![no_main]
use libfuzzer_sys::fuzz_target;

use read_glyf::{FontData, FontRef};

fuzz_target!(|data: &[u8]| {
    if let Ok(font) = FontRef::new(data) {
        for (_, outline) in font.outlines() {
            if let Ok(outline) = outline {
                let _ = outline.contours().count();
                let _ = outline.point_bytes();
            }
        }
    }
    // every offset is a candidate glyph record
    let data = FontData::new(data);
    for offset in 0..data.len().min(64) {
        let _ = read_glyf::decode_simple_glyph(data, offset);
    }
});
