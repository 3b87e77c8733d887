use flo_glyph_software::*;

use flo_curve_atlas::*;
use flo_glyph_render::*;

use std::error::{Error};
use std::f32::consts::{PI};
use std::fs::{File};

const PAGE_WIDTH: f32   = 210.0;
const PAGE_HEIGHT: f32  = 297.0;
const COLUMNS: usize    = 8;
const ROWS: usize       = 10;

///
/// A closed contour approximating a circle, clockwise (y up) unless `counter_clockwise` is set
///
fn circle(centre: [f32; 2], radius: f32, counter_clockwise: bool) -> Vec<QuadraticCurve> {
    const SEGMENTS: usize = 8;

    let step        = 2.0 * PI / (SEGMENTS as f32);
    let step        = if counter_clockwise { step } else { -step };
    let point_at    = |angle: f32, radius: f32| [centre[0] + angle.cos() * radius, centre[1] + angle.sin() * radius];

    (0..SEGMENTS)
        .map(|idx| {
            let start   = (idx as f32) * step;
            let end     = start + step;
            let control = radius / (step * 0.5).cos().abs();

            QuadraticCurve::new(point_at(start, radius), point_at((start + end) * 0.5, control), point_at(end, radius))
        })
        .collect()
}

///
/// A few glyph shapes: an 'L', a ring and a triangle
///
fn glyph_outlines() -> Vec<GlyphOutline> {
    vec![
        GlyphOutline::new((2, 2)).with_polygon(&[[0.2, 0.1], [0.2, 0.9], [0.4, 0.9], [0.4, 0.3], [0.8, 0.3], [0.8, 0.1]]),
        GlyphOutline::new((4, 4)).with_contour(circle([0.5, 0.5], 0.4, false)).with_contour(circle([0.5, 0.5], 0.25, true)),
        GlyphOutline::new((2, 2)).with_polygon(&[[0.1, 0.1], [0.5, 0.9], [0.9, 0.1]]),
    ]
}

///
/// Lays out a grid of glyphs on each page, returning the quad vertices and the JSON page list
///
fn lay_out_pages(origins: &[CurveOrigin], num_pages: usize) -> (Vec<GlyphVertex>, String) {
    let mut vertices    = vec![];
    let mut pages       = vec![];
    let glyph_width     = 0.8 / (COLUMNS as f32);
    let glyph_height    = glyph_width * PAGE_WIDTH / PAGE_HEIGHT;

    for page_idx in 0..num_pages {
        let begin_vertex = vertices.len();

        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let origin  = origins[(row + col + page_idx) % origins.len()];
                let x0      = 0.1 + (col as f32) * glyph_width;
                let y0      = 0.1 + (row as f32) * glyph_height * 1.2;
                let (x1, y1) = (x0 + glyph_width, y0 + glyph_height);
                let shade   = (row as f32) / (ROWS as f32) * 0.5;

                let corner = |x: f32, y: f32, corner_x: bool, corner_y: bool| {
                    GlyphVertex::with_pos(x, y)
                        .with_color(shade, 0.0, 0.3, 1.0)
                        .with_glyph_corner(origin, corner_x, corner_y)
                };

                vertices.extend([corner(x0, y0, false, true), corner(x1, y0, true, true), corner(x0, y1, false, false), corner(x1, y1, true, false)]);
            }
        }

        pages.push(format!(r#"{{ "width": {}, "height": {}, "beginVertex": {}, "endVertex": {} }}"#, PAGE_WIDTH, PAGE_HEIGHT, begin_vertex, vertices.len()));
    }

    (vertices, format!("[{}]", pages.join(", ")))
}

///
/// Renders two pages of glyphs, zoomed in on the first one, to glyph_page.png
///
pub fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Pack the glyphs into an atlas, and send it through the bitmap format the renderer loads
    let mut builder = AtlasBuilder::new(128);
    let origins     = glyph_outlines().iter()
        .map(|outline| builder.add_glyph(outline))
        .collect::<Result<Vec<_>, _>>()?;
    let atlas_bmp   = builder.build()?.to_bmp_bytes();

    // The vertices go through the vertex stream encoding
    let (vertices, page_json)   = lay_out_pages(&origins, 2);
    let vertex_stream           = encode_vertex_stream(&vertices);

    let settings        = RenderSettings { canvas_size: (1024, 768), ..RenderSettings::default() };
    let mut compositor  = PageCompositor::new(settings);

    compositor.resources_mut().load_atlas(&atlas_bmp)?;
    compositor.resources_mut().load_glyphs(&vertex_stream)?;
    compositor.load_pages(&page_json)?;

    // Zoom in on the first page and run the animation for a second
    compositor.transform_mut().set_target(ViewTransform::new(0.5, 0.6, -0.5));

    let mut renderer = SoftwareRenderer::new(FrameSize { width: 1024, height: 768 });
    for frame in 0..60 {
        if let Some(actions) = compositor.step_frame((frame as f64) * 16.0) {
            renderer.render(actions);
        }
    }

    compositor.finish_animations();
    if let Some(actions) = compositor.step_frame(1000.0) {
        renderer.render(actions);
    }

    write_png(renderer.frame(), File::create("glyph_page.png")?)?;
    println!("Wrote glyph_page.png after {} frames", renderer.frames_shown());

    Ok(())
}
