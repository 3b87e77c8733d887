use super::curve::*;
use super::surface::*;
use super::texel::*;

/// Index values below this are not curves: 0 and 1 address the grid records at the start of a glyph
pub const FIRST_CURVE_INDEX: u8 = 2;

///
/// The texel coordinate where a glyph's record starts in a curve atlas
///
/// The texel at the origin stores the location of the glyph's acceleration grid, the next one stores the
/// grid resolution, and the control points follow on the same row.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CurveOrigin {
    pub x: u16,
    pub y: u16,
}

impl CurveOrigin {
    ///
    /// Decodes an origin from the atlas-coordinate field of a vertex, returning the origin and the corner flag
    ///
    #[inline]
    pub fn from_vertex_field(raw: [u16; 2]) -> (CurveOrigin, [u16; 2]) {
        let (x, flag_x) = decode_with_flag(raw[0]);
        let (y, flag_y) = decode_with_flag(raw[1]);

        (CurveOrigin { x, y }, [flag_x, flag_y])
    }

    ///
    /// Encodes this origin into a vertex atlas-coordinate field for the specified corner of the glyph box
    ///
    #[inline]
    pub fn to_vertex_field(&self, corner_x: bool, corner_y: bool) -> [u16; 2] {
        [encode_with_flag(self.x, corner_x), encode_with_flag(self.y, corner_y)]
    }

    ///
    /// The texel address of the control point stored at the specified index
    ///
    #[inline]
    pub fn control_point_address(&self, index: usize) -> (usize, usize) {
        (self.x as usize + index, self.y as usize)
    }
}

///
/// The grid records for a glyph, as read from the texels at its origin
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphRecord {
    /// Where the glyph starts in the atlas
    pub origin: CurveOrigin,

    /// Texel coordinate of the first cell of the acceleration grid
    pub grid_min: [f32; 2],

    /// The number of cells in the grid along each axis
    pub grid_size: [f32; 2],
}

impl GlyphRecord {
    ///
    /// Reads the grid records for the glyph at the specified origin
    ///
    /// Returns None if the origin is outside of the atlas or the grid has no cells (which can only happen if
    /// the atlas data is malformed)
    ///
    pub fn read(atlas: &CurveAtlas, origin: CurveOrigin) -> Option<GlyphRecord> {
        let grid_min    = atlas.fetch_ushort_pair(origin.x as usize, origin.y as usize)?;
        let grid_size   = atlas.fetch_ushort_pair(origin.x as usize + 1, origin.y as usize)?;

        if grid_size[0] < 1.0 || grid_size[1] < 1.0 {
            None
        } else {
            Some(GlyphRecord { origin, grid_min, grid_size })
        }
    }

    ///
    /// Reads the curve starting at the specified index (None if the curve is outside the atlas)
    ///
    pub fn curve(&self, atlas: &CurveAtlas, index: u8) -> Option<QuadraticCurve> {
        let (x, y) = self.origin.control_point_address(index as usize);

        let p0 = atlas.fetch_normalized_pair(x, y)?;
        let p1 = atlas.fetch_normalized_pair(x + 1, y)?;
        let p2 = atlas.fetch_normalized_pair(x + 2, y)?;

        Some(QuadraticCurve::new(p0, p1, p2))
    }
}
