use flo_glyph_render::*;
use flo_curve_atlas::*;

fn test_quads(num_quads: usize) -> Vec<GlyphVertex> {
    let origin = CurveOrigin { x: 12, y: 34 };

    (0..num_quads)
        .flat_map(|quad_idx| {
            let x = (quad_idx as f32) * 0.01;

            vec![
                GlyphVertex::with_pos(x, 0.1).with_color(1.0, 0.0, 0.0, 1.0).with_glyph_corner(origin, false, true),
                GlyphVertex::with_pos(x + 0.01, 0.1).with_color(1.0, 0.0, 0.0, 1.0).with_glyph_corner(origin, true, true),
                GlyphVertex::with_pos(x, 0.2).with_color(1.0, 0.0, 0.0, 1.0).with_glyph_corner(origin, false, false),
                GlyphVertex::with_pos(x + 0.01, 0.2).with_color(1.0, 0.0, 0.0, 1.0).with_glyph_corner(origin, true, false),
            ]
        })
        .collect()
}

#[test]
fn strip_has_six_vertices_per_quad() {
    for num_quads in [0, 1, 2, 17].iter() {
        let buffer = GlyphVertexBuffer::from_quads(test_quads(*num_quads));

        assert!(buffer.quad_count() == *num_quads);
        assert!(buffer.strip_vertices().len() == 6 * num_quads, "{} quads -> {} vertices", num_quads, buffer.strip_vertices().len());
    }
}

#[test]
fn strip_repeats_first_and_last_vertex() {
    let quads   = test_quads(5);
    let buffer  = GlyphVertexBuffer::from_quads(quads.clone());
    let strip   = buffer.strip_vertices();

    for quad_idx in 0..5 {
        let v0 = quads[quad_idx*4];
        let v3 = quads[quad_idx*4 + 3];

        assert!(strip[quad_idx*6] == v0, "quad {}", quad_idx);
        assert!(strip[quad_idx*6 + 1] == v0, "quad {}", quad_idx);
        assert!(strip[quad_idx*6 + 2] == quads[quad_idx*4 + 1], "quad {}", quad_idx);
        assert!(strip[quad_idx*6 + 3] == quads[quad_idx*4 + 2], "quad {}", quad_idx);
        assert!(strip[quad_idx*6 + 4] == v3, "quad {}", quad_idx);
        assert!(strip[quad_idx*6 + 5] == v3, "quad {}", quad_idx);
    }
}

#[test]
fn delta_decoding_restores_positions() {
    let quads   = test_quads(9);
    let stream  = encode_vertex_stream(&quads);
    let decoded = decode_vertex_stream(&stream).unwrap();

    assert!(decoded.quad_vertices() == &quads[..]);
}

#[test]
fn stream_is_header_plus_records() {
    let stream = encode_vertex_stream(&test_quads(3));

    assert!(stream.len() == VERTEX_STREAM_HEADER_SIZE + 12 * 4 * 3, "{}", stream.len());
}

#[test]
fn positions_wrap_around_when_decoding() {
    // Going from a large position to a small one produces a delta that wraps
    let mut quads   = test_quads(2);
    quads[4].pos    = [65535, 65535];
    quads[5].pos    = [0, 1];

    let decoded = decode_vertex_stream(&encode_vertex_stream(&quads)).unwrap();
    assert!(decoded.quad_vertices()[4].pos == [65535, 65535]);
    assert!(decoded.quad_vertices()[5].pos == [0, 1]);
}

#[test]
fn partial_record_is_rejected() {
    let mut stream = encode_vertex_stream(&test_quads(1));
    stream.push(0);

    assert!(decode_vertex_stream(&stream) == Err(DecodeError::UnsupportedInputLength(49)));
}

#[test]
fn strip_range_for_vertex_range() {
    assert!(strip_range(0, 4) == (0..6));
    assert!(strip_range(8, 20) == (12..30));
    assert!(strip_range(8, 8) == (12..12));
}

#[test]
fn quad_centre_is_middle_of_box() {
    let buffer = GlyphVertexBuffer::from_quads(test_quads(2));
    let centre = buffer.quad_centre(1).unwrap();

    assert!((centre[0] - 0.015).abs() < 1e-4, "{:?}", centre);
    assert!((centre[1] - 0.15).abs() < 1e-4, "{:?}", centre);
    assert!(buffer.quad_centre(2).is_none());
}
