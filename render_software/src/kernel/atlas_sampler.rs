use flo_curve_atlas::*;

use smallvec::*;

///
/// The curves listed in one cell of a glyph's acceleration grid, relative to the pixel being shaded
///
#[derive(Clone, Debug)]
pub struct SampledCell {
    /// The integer cell coordinate
    pub cell: [f32; 2],

    /// The centre of the cell in glyph-normalized coordinates
    pub cell_mid: [f32; 2],

    /// The slots read from the atlas for this cell
    pub grid_cell: GridCell,

    /// The control points of each curve in the cell, offset so the pixel is at the origin
    pub curves: SmallVec<[[[f32; 2]; 3]; MAX_CURVES_PER_CELL]>,
}

///
/// Reads the curves for a single glyph from a curve atlas
///
#[derive(Clone, Copy, Debug)]
pub struct GlyphSampler<'a> {
    atlas:  &'a CurveAtlas,
    record: GlyphRecord,
}

impl<'a> GlyphSampler<'a> {
    ///
    /// Creates a sampler for the glyph at the specified origin (None if the glyph record can't be read)
    ///
    #[inline]
    pub fn new(atlas: &'a CurveAtlas, origin: CurveOrigin) -> Option<GlyphSampler<'a>> {
        let record = GlyphRecord::read(atlas, origin)?;

        Some(GlyphSampler { atlas, record })
    }

    ///
    /// Fetches the cell containing a glyph-normalized coordinate, along with its curves
    ///
    /// Returns None if any of the texels that are needed are outside of the atlas.
    ///
    pub fn sample(&self, norm_coord: [f32; 2]) -> Option<SampledCell> {
        let grid_size   = self.record.grid_size;
        let cell        = GridCell::cell_for_coordinate(norm_coord, grid_size);
        let cell_mid    = GridCell::cell_mid(cell, grid_size);
        let grid_cell   = GridCell::read(self.atlas, &self.record, cell)?;

        let mut curves = smallvec![];
        for curve_idx in grid_cell.curve_indices() {
            let curve = self.record.curve(self.atlas, curve_idx)?;
            curves.push(curve.relative_to(norm_coord).points);
        }

        Some(SampledCell { cell, cell_mid, grid_cell, curves })
    }
}
