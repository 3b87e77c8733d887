use flo_glyph_render::*;

fn pages_json(num_pages: usize, width: f32, height: f32) -> String {
    let pages = (0..num_pages)
        .map(|idx| format!(r#"{{ "width": {}, "height": {}, "beginVertex": {}, "endVertex": {} }}"#, width, height, idx*8, (idx+1)*8))
        .collect::<Vec<_>>();

    format!("[{}]", pages.join(","))
}

#[test]
fn parse_page_list() {
    let pages = PageDescriptor::list_from_json(&pages_json(2, 210.0, 297.0)).unwrap();

    assert!(pages.len() == 2);
    assert!(pages[1] == PageDescriptor { width: 210.0, height: 297.0, begin_vertex: 8, end_vertex: 16 });
}

#[test]
fn single_page_has_one_column() {
    let layout = PageLayout::from_json(&pages_json(1, 100.0, 100.0), (1024.0, 768.0), DEFAULT_PAGE_GAP).unwrap();

    assert!(layout.columns() == 1);
    assert!(layout.pages()[0].offset == [0.0, 0.0]);
}

#[test]
fn columns_follow_canvas_shape() {
    // 16 square pages on a square canvas make a 4x4 grid
    let layout = PageLayout::from_json(&pages_json(16, 100.0, 100.0), (800.0, 800.0), 1.0).unwrap();

    assert!(layout.columns() == 4, "{}", layout.columns());

    let page = &layout.pages()[6];
    assert!(page.column == 2 && page.row == 1);
    assert!(page.offset == [-2.0, 1.0], "{:?}", page.offset);
    assert!(page.world_bounds() == ([2.0, -1.0], [3.0, 0.0]), "{:?}", page.world_bounds());
}

#[test]
fn wide_canvas_has_more_columns() {
    let layout = PageLayout::from_json(&pages_json(16, 100.0, 100.0), (1600.0, 400.0), 1.0).unwrap();

    assert!(layout.columns() == 8, "{}", layout.columns());
}

#[test]
fn empty_page_list_is_rejected() {
    assert!(matches!(PageLayout::from_json("[]", (100.0, 100.0), 1.0), Err(PageError::NoPages)));
}

#[test]
fn bad_json_is_rejected() {
    assert!(matches!(PageLayout::from_json("[{ \"width\": 1 ", (100.0, 100.0), 1.0), Err(PageError::Parse(_))));
}

#[test]
fn zero_sized_page_is_rejected() {
    assert!(matches!(PageLayout::from_json(&pages_json(1, 0.0, 100.0), (100.0, 100.0), 1.0), Err(PageError::EmptyPage(0))));
}

#[test]
fn vertex_ranges_are_checked() {
    let layout = PageLayout::from_json(&pages_json(2, 100.0, 100.0), (100.0, 100.0), 1.0).unwrap();

    assert!(layout.check_ranges(16).is_ok());
    assert!(matches!(layout.check_ranges(12), Err(PageError::RangeOutOfBounds(1, 12))));

    let unaligned = PageLayout::from_json(r#"[{ "width": 1, "height": 1, "beginVertex": 2, "endVertex": 8 }]"#, (100.0, 100.0), 1.0).unwrap();
    assert!(matches!(unaligned.check_ranges(16), Err(PageError::UnalignedRange(0))));
}

#[test]
fn background_has_six_vertices_per_page() {
    let layout      = PageLayout::from_json(&pages_json(3, 100.0, 100.0), (100.0, 100.0), 1.0).unwrap();
    let vertices    = layout.background_vertices();

    assert!(vertices.len() == 18);
    assert!(vertices[0] == vertices[1]);
    assert!(vertices[4] == vertices[5]);
}

#[test]
fn strip_range_for_page() {
    let layout = PageLayout::from_json(&pages_json(3, 100.0, 100.0), (100.0, 100.0), 1.0).unwrap();

    assert!(layout.pages()[2].strip_range() == (24..36));
    assert!(layout.pages()[2].glyph_count() == 2);
}
