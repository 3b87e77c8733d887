use super::strip::*;
use super::triangle::*;
use super::vertex_stage::*;

use crate::kernel::*;

use flo_curve_atlas::*;
use flo_glyph_render::*;

use std::ops::{Range};

///
/// A triangle of a glyph quad, ready to be shaded
///
#[derive(Clone, Copy, Debug)]
pub struct GlyphPrimitive<'a> {
    /// The triangle on the screen
    pub triangle: ScreenTriangle,

    /// Interpolates the x glyph coordinate
    pub norm_x: AffinePlane,

    /// Interpolates the y glyph coordinate
    pub norm_y: AffinePlane,

    /// Reads the glyph's curves (None if the glyph record is malformed)
    pub glyph: Option<GlyphSampler<'a>>,

    /// The tint colour of the glyph
    pub color: [f32; 4],
}

impl<'a> GlyphPrimitive<'a> {
    ///
    /// The glyph coordinate at the centre of a pixel, with its derivatives per pixel horizontally and vertically (y up)
    ///
    #[inline]
    pub fn coordinate_at(&self, x: usize, y: usize) -> ([f32; 2], [f32; 2], [f32; 2]) {
        let px = (x as f32) + 0.5;
        let py = (y as f32) + 0.5;

        let norm_coord  = [self.norm_x.value_at(px, py), self.norm_y.value_at(px, py)];
        let dfdx        = [self.norm_x.ddx, self.norm_y.ddx];
        let dfdy        = [-self.norm_x.ddy, -self.norm_y.ddy];

        (norm_coord, dfdx, dfdy)
    }
}

///
/// Sets up the glyph triangles for a range of a glyph triangle strip
///
pub fn glyph_primitives<'a>(vertices: &[GlyphVertex], range: Range<usize>, stage: &VertexStage, atlas: &'a CurveAtlas) -> Vec<GlyphPrimitive<'a>> {
    strip_triangles(vertices, range)
        .filter_map(|[a, b, c]| {
            let shaded      = [stage.glyph_vertex(&vertices[a]), stage.glyph_vertex(&vertices[b]), stage.glyph_vertex(&vertices[c])];
            let triangle    = ScreenTriangle::new([shaded[0].screen_pos, shaded[1].screen_pos, shaded[2].screen_pos])?;

            let norm_x      = triangle.plane([shaded[0].norm_coord[0], shaded[1].norm_coord[0], shaded[2].norm_coord[0]]);
            let norm_y      = triangle.plane([shaded[0].norm_coord[1], shaded[1].norm_coord[1], shaded[2].norm_coord[1]]);

            // Every corner of a quad refers to the same glyph
            let glyph       = GlyphSampler::new(atlas, shaded[0].origin);
            if glyph.is_none() {
                log::debug!("Glyph at {:?} has a malformed record", shaded[0].origin);
            }

            Some(GlyphPrimitive {
                triangle:   triangle,
                norm_x:     norm_x,
                norm_y:     norm_y,
                glyph:      glyph,
                color:      shaded[0].color,
            })
        })
        .collect()
}

///
/// Sets up the triangles for a range of a page background triangle strip
///
pub fn page_primitives(vertices: &[PageVertex], range: Range<usize>, stage: &VertexStage) -> Vec<ScreenTriangle> {
    strip_triangles(vertices, range)
        .filter_map(|[a, b, c]| {
            ScreenTriangle::new([stage.page_vertex(&vertices[a]), stage.page_vertex(&vertices[b]), stage.page_vertex(&vertices[c])])
        })
        .collect()
}
