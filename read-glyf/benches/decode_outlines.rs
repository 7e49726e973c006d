use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glyf_test_data::{glyf, GlyfFontBuilder};
use read_glyf::{types::GlyphId, FontRef};

/// A font that repeats a few simple glyphs, with an empty glyph between each.
fn synthetic_font(num_glyphs: usize) -> Vec<u8> {
    let mut builder = GlyfFontBuilder::new();
    builder.long_loca(true);
    for i in 0..num_glyphs {
        match i % 3 {
            0 => builder.push_glyph(glyf::SQUARE_WITH_HOLE),
            1 => builder.push_glyph(&[]),
            _ => builder.push_glyph(glyf::TRIANGLE),
        };
    }
    builder.build()
}

fn decode_outlines(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_outlines");
    for num_glyphs in [256, 4096, 65_535] {
        let data = synthetic_font(num_glyphs);
        group.bench_with_input(BenchmarkId::new("load", num_glyphs), &data, |b, data| {
            b.iter(|| FontRef::new(black_box(data)).unwrap().num_glyphs())
        });
        let font = FontRef::new(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("outlines", num_glyphs), &font, |b, font| {
            b.iter(|| {
                font.outlines()
                    .map(|(_, outline)| outline.map(|o| o.num_points()).unwrap_or(0))
                    .sum::<usize>()
            })
        });
    }
    group.finish();
}

fn decode_one(c: &mut Criterion) {
    let data = synthetic_font(3);
    let font = FontRef::new(&data).unwrap();
    c.bench_function("decode_square_with_hole", |b| {
        b.iter(|| font.outline(black_box(GlyphId::new(0))).unwrap())
    });
}

criterion_group!(benches, decode_outlines, decode_one);
criterion_main!(benches);
