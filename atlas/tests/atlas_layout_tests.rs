use flo_curve_atlas::*;

fn letter_l() -> GlyphOutline {
    // An 'L' shape, clockwise in y-up glyph space
    GlyphOutline::new((2, 2)).with_polygon(&[
        [0.2, 0.1],
        [0.2, 0.9],
        [0.4, 0.9],
        [0.4, 0.3],
        [0.8, 0.3],
        [0.8, 0.1],
    ])
}

#[test]
fn split_and_decode_every_ushort() {
    for value in 0..=65535u32 {
        let hi      = ((value / 256) as f32) / 255.0;
        let lo      = ((value % 256) as f32) / 255.0;
        let decoded = ushort_from_channels(hi, lo);

        assert!(decoded == value as f32, "{} != {}", decoded, value);
    }
}

#[test]
fn glyph_survives_bitmap_round_trip() {
    let mut builder = AtlasBuilder::new(32);
    let origin      = builder.add_glyph(&letter_l()).unwrap();
    let atlas       = builder.build().unwrap();

    let loaded      = CurveAtlas::from_bmp_bytes(&atlas.to_bmp_bytes()).unwrap();
    let record      = GlyphRecord::read(&loaded, origin).unwrap();

    assert!(record.grid_size == [2.0, 2.0]);

    // Every curve in the glyph should be listed in at least one cell
    let mut seen = vec![];
    for cell_y in 0..2 {
        for cell_x in 0..2 {
            let cell = GridCell::read(&loaded, &record, [cell_x as f32, cell_y as f32]).unwrap();
            seen.extend(cell.curve_indices());
        }
    }
    seen.sort();
    seen.dedup();

    assert!(seen == vec![2, 4, 6, 8, 10, 12], "{:?}", seen);
}

#[test]
fn cell_centres_inside_letter() {
    let mut builder = AtlasBuilder::new(32);
    let origin      = builder.add_glyph(&letter_l()).unwrap();
    let atlas       = builder.build().unwrap();
    let record      = GlyphRecord::read(&atlas, origin).unwrap();

    let mid_inside = |x: f32, y: f32| GridCell::read(&atlas, &record, [x, y]).unwrap().mid_inside();

    // Cell centres are at 0.25 and 0.75: only the top-right one misses the L
    assert!(mid_inside(0.0, 0.0));
    assert!(mid_inside(0.0, 1.0));
    assert!(mid_inside(1.0, 0.0));
    assert!(!mid_inside(1.0, 1.0));
}

#[test]
fn zero_grid_is_malformed() {
    let texels  = vec![Texel::from_ushorts(0, 1), Texel::from_ushorts(0, 0), Texel::default(), Texel::default()];
    let atlas   = CurveAtlas::from_texels(4, 1, texels).unwrap();

    assert!(GlyphRecord::read(&atlas, CurveOrigin { x: 0, y: 0 }).is_none());
}

#[test]
fn curve_outside_atlas_is_none() {
    let mut builder = AtlasBuilder::new(32);
    let origin      = builder.add_glyph(&letter_l()).unwrap();
    let atlas       = builder.build().unwrap();
    let record      = GlyphRecord::read(&atlas, origin).unwrap();

    assert!(record.curve(&atlas, 2).is_some());
    assert!(record.curve(&atlas, 40).is_none());
}
