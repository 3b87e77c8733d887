use flo_curve_atlas::*;
use flo_glyph_render::*;

/// Glyph quads are expanded by this fraction of their size on each side so curves at the edges are fully covered
pub const GLYPH_EXPAND_FACTOR: f32 = 0.1;

///
/// Converts a point in normalized device coordinates to pixel coordinates (y increasing downwards)
///
#[inline]
pub fn ndc_to_pixel(ndc: [f32; 2], frame_size: (usize, usize)) -> [f32; 2] {
    let (width, height) = frame_size;

    [(ndc[0] + 1.0) * 0.5 * (width as f32), (1.0 - ndc[1]) * 0.5 * (height as f32)]
}

///
/// A glyph vertex after it has been positioned on the screen
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ShadedGlyphVertex {
    /// Position in pixel coordinates
    pub screen_pos: [f32; 2],

    /// Coordinate within the glyph (0..1 across the glyph's bounds, extended by the expansion factor)
    pub norm_coord: [f32; 2],

    /// Where the glyph's curves are stored in the atlas
    pub origin: CurveOrigin,

    /// The tint colour (non-premultiplied)
    pub color: [f32; 4],
}

///
/// Positions the vertices of glyph quads and page rectangles on the screen
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VertexStage {
    /// The multiply-add pair that maps vertex positions to normalized device coordinates
    pub transform: PositionTransform,

    /// Size of the frame in pixels
    pub frame_size: (usize, usize),
}

impl VertexStage {
    ///
    /// Creates a vertex stage for a frame of the specified size
    ///
    pub fn new(transform: PositionTransform, frame_size: (usize, usize)) -> VertexStage {
        VertexStage { transform, frame_size }
    }

    ///
    /// Maps a transformed position to the screen, correcting for the aspect ratio of the frame
    ///
    #[inline]
    fn to_screen(&self, pos: [f32; 2]) -> [f32; 2] {
        let (width, height) = self.frame_size;
        let [x, y]          = self.transform.apply(pos);
        let x               = x * (height.max(1) as f32) / (width.max(1) as f32);

        ndc_to_pixel([x, y], self.frame_size)
    }

    ///
    /// Positions a glyph vertex (page positions have y increasing down the page)
    ///
    pub fn glyph_vertex(&self, vertex: &GlyphVertex) -> ShadedGlyphVertex {
        let [x, y]                  = vertex.normalized_pos();
        let (origin, corner_flag)   = vertex.glyph_corner();
        let expand                  = |flag: u16| (flag as f32) * (1.0 + 2.0*GLYPH_EXPAND_FACTOR) - GLYPH_EXPAND_FACTOR;
        let [r, g, b, a]            = vertex.color;

        ShadedGlyphVertex {
            screen_pos: self.to_screen([x, 1.0 - y]),
            norm_coord: [expand(corner_flag[0]), expand(corner_flag[1])],
            origin:     origin,
            color:      [(r as f32)/255.0, (g as f32)/255.0, (b as f32)/255.0, (a as f32)/255.0],
        }
    }

    ///
    /// Positions a page background vertex
    ///
    pub fn page_vertex(&self, vertex: &PageVertex) -> [f32; 2] {
        self.to_screen(vertex.pos)
    }
}
