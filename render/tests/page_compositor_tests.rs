use flo_glyph_render::*;
use flo_curve_atlas::*;

fn test_atlas() -> CurveAtlas {
    let mut builder = AtlasBuilder::new(32);
    builder.add_glyph(&GlyphOutline::new((1, 1)).with_polygon(&[[0.2, 0.2], [0.2, 0.8], [0.8, 0.8], [0.8, 0.2]])).unwrap();

    builder.build().unwrap()
}

fn test_glyphs(num_quads: usize) -> GlyphVertexBuffer {
    let quads = (0..num_quads)
        .flat_map(|_| vec![
            GlyphVertex::with_pos(0.4, 0.4), GlyphVertex::with_pos(0.6, 0.4),
            GlyphVertex::with_pos(0.4, 0.6), GlyphVertex::with_pos(0.6, 0.6)
        ])
        .collect();

    GlyphVertexBuffer::from_quads(quads)
}

fn pages_json(num_pages: usize) -> String {
    let pages = (0..num_pages)
        .map(|idx| format!(r#"{{ "width": 100, "height": 100, "beginVertex": {}, "endVertex": {} }}"#, idx*4, (idx+1)*4))
        .collect::<Vec<_>>();

    format!("[{}]", pages.join(","))
}

fn ready_compositor(num_pages: usize) -> PageCompositor {
    let settings        = RenderSettings { canvas_size: (100, 100), ..RenderSettings::default() };
    let mut compositor  = PageCompositor::new(settings);

    compositor.resources_mut().set_atlas(test_atlas());
    compositor.resources_mut().set_glyphs(test_glyphs(num_pages)).unwrap();
    compositor.load_pages(&pages_json(num_pages)).unwrap();
    compositor.transform_mut().set_target(ViewTransform::new(0.5, 0.5, 0.0));
    compositor.finish_animations();

    compositor
}

fn glyph_draws(actions: &[RenderAction]) -> Vec<std::ops::Range<usize>> {
    actions.iter()
        .filter_map(|action| match action {
            RenderAction::DrawTriangleStrip(GLYPH_VERTEX_BUFFER, range)    => Some(range.clone()),
            _                                                               => None,
        })
        .collect()
}

#[test]
fn no_frame_until_resources_are_loaded() {
    let mut compositor = PageCompositor::new(RenderSettings::default());
    assert!(compositor.step_frame(0.0).is_none());

    compositor.resources_mut().set_atlas(test_atlas());
    assert!(compositor.step_frame(16.0).is_none());

    compositor.resources_mut().set_glyphs(test_glyphs(1)).unwrap();
    assert!(compositor.step_frame(32.0).is_none());
    assert!(compositor.upload_actions().is_empty());

    compositor.load_pages(&pages_json(1)).unwrap();
    assert!(compositor.step_frame(48.0).is_some());
}

#[test]
fn resources_are_uploaded_once() {
    let mut compositor  = ready_compositor(1);
    let first_frame     = compositor.step_frame(0.0).unwrap();

    assert!(matches!(first_frame[0], RenderAction::CreateCurveAtlas(CURVE_ATLAS, _)));
    assert!(matches!(first_frame[1], RenderAction::CreateGlyphVertexBuffer(GLYPH_VERTEX_BUFFER, _)));
    assert!(matches!(first_frame[2], RenderAction::CreatePageVertexBuffer(PAGE_VERTEX_BUFFER, _)));
    assert!(compositor.upload_actions().is_empty());

    compositor.force_render();
    let second_frame = compositor.step_frame(16.0).unwrap();
    assert!(!second_frame.iter().any(|action| matches!(action, RenderAction::CreateCurveAtlas(_, _))));
}

#[test]
fn frame_draws_pages_then_glyphs() {
    let compositor  = ready_compositor(1);
    let actions     = compositor.frame_actions().unwrap();

    assert!(actions[0] == RenderAction::Clear(compositor.settings().background_color));
    assert!(actions[1] == RenderAction::BlendMode(BlendMode::Opaque));
    assert!(actions[2] == RenderAction::UseShader(ShaderType::PageBackground { color: compositor.settings().page_color }));
    assert!(matches!(actions[3], RenderAction::SetTransform(_)));
    assert!(actions[4] == RenderAction::DrawTriangleStrip(PAGE_VERTEX_BUFFER, 0..6));
    assert!(actions[5] == RenderAction::BlendMode(BlendMode::SourceOver));
    assert!(actions[6] == RenderAction::UseShader(ShaderType::Glyph { atlas: CURVE_ATLAS, show_grids: false }));
    assert!(glyph_draws(&actions) == vec![0..6]);
}

#[test]
fn page_transform_centres_the_view() {
    let compositor  = ready_compositor(1);
    let actions     = compositor.frame_actions().unwrap();

    let transform = actions.iter().rev()
        .filter_map(|action| match action { RenderAction::SetTransform(transform) => Some(*transform), _ => None })
        .next()
        .unwrap();

    // The middle of the page (0.5, 0.5) is at the middle of the viewport
    let centre = transform.apply([0.5, 0.5]);
    assert!(centre[0].abs() < 1e-6 && centre[1].abs() < 1e-6, "{:?}", centre);
}

#[test]
fn pages_outside_viewport_are_culled() {
    // 16 pages in a 4x4 grid, looking at the first one close up
    let mut compositor = ready_compositor(16);

    compositor.transform_mut().set_target(ViewTransform::new(0.5, 0.5, -1.0));
    compositor.finish_animations();

    assert!(compositor.visible_pages() == vec![0], "{:?}", compositor.visible_pages());

    let actions = compositor.frame_actions().unwrap();
    assert!(glyph_draws(&actions) == vec![0..6]);

    // The page backgrounds are all drawn in one strip
    assert!(actions.contains(&RenderAction::DrawTriangleStrip(PAGE_VERTEX_BUFFER, 0..96)));
}

#[test]
fn zooming_out_shows_every_page() {
    let mut compositor = ready_compositor(16);

    compositor.transform_mut().set_target(ViewTransform::new(-1.5, -1.0, 3.0));
    compositor.finish_animations();

    assert!(compositor.visible_pages().len() == 16, "{:?}", compositor.visible_pages());
}

#[test]
fn animation_moves_towards_target() {
    let mut compositor = ready_compositor(1);
    compositor.step_frame(0.0);

    compositor.transform_mut().pan_by(0.2, 0.0);
    assert!(compositor.step_frame(16.0).is_some());

    let current = compositor.transform().current();
    assert!(current.x > 0.5 && current.x < 0.7, "{:?}", current);
}

#[test]
fn settings_from_json() {
    let settings = RenderSettings::from_json(r#"{ "canvasSize": [640, 480], "showGrids": true, "backgroundColor": [0, 0, 0, 255] }"#).unwrap();

    assert!(settings.canvas_size == (640, 480));
    assert!(settings.show_grids);
    assert!(settings.background_color == Rgba8([0, 0, 0, 255]));
    assert!(settings.page_gap == DEFAULT_PAGE_GAP);
}

#[test]
fn glyphs_that_do_not_cover_the_pages_are_rejected() {
    let mut compositor = PageCompositor::new(RenderSettings { canvas_size: (100, 100), ..RenderSettings::default() });
    compositor.resources_mut().set_atlas(test_atlas());
    compositor.load_pages(&pages_json(2)).unwrap();

    // The second page's vertex range ends beyond the single glyph in the stream
    let stream = encode_vertex_stream(test_glyphs(1).quad_vertices());
    let result = compositor.resources_mut().load_glyphs(&stream);

    assert!(matches!(result, Err(ResourceError::Page(PageError::RangeOutOfBounds(1, 4)))), "{:?}", result);
    assert!(compositor.resources().glyphs().is_none());
    assert!(compositor.step_frame(0.0).is_none());

    // A stream that covers both pages loads
    let stream = encode_vertex_stream(test_glyphs(2).quad_vertices());
    assert!(compositor.resources_mut().load_glyphs(&stream).is_ok());
    assert!(compositor.step_frame(16.0).is_some());
}

#[test]
fn pages_outside_the_glyphs_are_rejected() {
    let mut compositor = PageCompositor::new(RenderSettings::default());
    compositor.resources_mut().set_glyphs(test_glyphs(1)).unwrap();

    let result = compositor.load_pages(r#"[{ "width": 100, "height": 100, "beginVertex": 0, "endVertex": 999 }]"#);

    assert!(matches!(result, Err(PageError::UnalignedRange(0))), "{:?}", result);
    assert!(!compositor.resources().is_ready());
}
