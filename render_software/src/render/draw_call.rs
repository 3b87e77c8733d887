use super::renderer::*;
use super::render_slice::*;

use crate::kernel::*;
use crate::pixel::*;
use crate::raster::*;

use flo_glyph_render::{BlendMode};

///
/// A single draw call, with its triangles already set up on the screen
///
#[derive(Clone, Debug)]
pub enum DrawCall<'a> {
    /// Fills page rectangles with a flat colour
    Pages {
        triangles:  Vec<ScreenTriangle>,
        color:      F32LinearPixel,
        blend_mode: BlendMode,
    },

    /// Draws glyph quads, shading each pixel by its coverage
    Glyphs {
        primitives: Vec<GlyphPrimitive<'a>>,
        show_grids: bool,
        blend_mode: BlendMode,
    },
}

impl<'a> DrawCall<'a> {
    ///
    /// The number of triangles this draw call rasterises
    ///
    pub fn primitive_count(&self) -> usize {
        match self {
            DrawCall::Pages { triangles, .. }       => triangles.len(),
            DrawCall::Glyphs { primitives, .. }     => primitives.len(),
        }
    }
}

///
/// Renders a draw call to a band of rows
///
#[derive(Clone, Copy, Debug)]
pub struct DrawCallRenderer<'a, const N: usize> {
    kernel: &'a CoverageKernel<N>,
}

impl<'a, const N: usize> DrawCallRenderer<'a, N> {
    ///
    /// Creates a renderer that uses the specified kernel to evaluate glyph coverage
    ///
    pub fn new(kernel: &'a CoverageKernel<N>) -> Self {
        DrawCallRenderer { kernel }
    }

    ///
    /// Fills the covered pixels of a triangle within a band
    ///
    #[inline]
    fn fill_triangle<TShadeFn>(triangle: &ScreenTriangle, region: &RenderSlice, dest: &mut [F32LinearPixel], blend_mode: BlendMode, mut shade: TShadeFn)
    where
        TShadeFn: FnMut(usize, usize) -> Option<F32LinearPixel>,
    {
        let rows    = triangle.rows(region.frame_height);
        let start   = rows.start.max(region.rows.start);
        let end     = rows.end.min(region.rows.end);

        if start >= end {
            return;
        }

        let columns = triangle.columns(region.width);

        for y in start..end {
            let line = &mut dest[(y-region.rows.start)*region.width..(y-region.rows.start+1)*region.width];

            for x in columns.clone() {
                if !triangle.covers(x, y) {
                    continue;
                }

                if let Some(pixel) = shade(x, y) {
                    line[x] = pixel.blend(line[x], blend_mode);
                }
            }
        }
    }
}

impl<'a, const N: usize> Renderer for DrawCallRenderer<'a, N> {
    type Region = RenderSlice;
    type Source = DrawCall<'a>;
    type Dest   = [F32LinearPixel];

    fn render(&self, region: &RenderSlice, source: &DrawCall<'a>, dest: &mut [F32LinearPixel]) {
        match source {
            DrawCall::Pages { triangles, color, blend_mode } => {
                for triangle in triangles.iter() {
                    Self::fill_triangle(triangle, region, dest, *blend_mode, |_, _| Some(*color));
                }
            }

            DrawCall::Glyphs { primitives, show_grids, blend_mode } => {
                for primitive in primitives.iter() {
                    let kernel = self.kernel;

                    Self::fill_triangle(&primitive.triangle, region, dest, *blend_mode, |x, y| {
                        let (norm_coord, dfdx, dfdy) = primitive.coordinate_at(x, y);

                        // Glyphs with malformed records produce no coverage
                        let coverage = match &primitive.glyph {
                            Some(glyph) => kernel.evaluate(glyph, norm_coord, dfdx, dfdy),
                            None        => PixelCoverage::EMPTY,
                        };

                        let color = coverage.shade(primitive.color, *show_grids);
                        if color[3] <= 0.0 && *blend_mode == BlendMode::SourceOver {
                            None
                        } else {
                            Some(F32LinearPixel::from_straight_rgba(color))
                        }
                    });
                }
            }
        }
    }
}
