use super::curve::*;
use super::error::*;
use super::glyph::*;
use super::grid::*;
use super::surface::*;
use super::texel::*;

use smallvec::*;

/// The largest texel coordinate that can be stored alongside a corner flag
const MAX_ORIGIN_COORD: usize = 0x7fff;

///
/// A glyph outline to be packed into an atlas
///
/// Outlines are made up of closed contours of quadratic curves in glyph-normalized space (0..1 on both
/// axes, y pointing upwards). Each contour must be closed (each curve starting where the previous one
/// ended) and filled regions must lie to the right of the direction of travel.
///
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphOutline {
    /// The contours making up this glyph
    pub contours: Vec<Vec<QuadraticCurve>>,

    /// The resolution of the acceleration grid to generate for this glyph
    pub grid_size: (usize, usize),
}

impl GlyphOutline {
    ///
    /// Creates an empty outline with the specified acceleration grid size
    ///
    pub fn new(grid_size: (usize, usize)) -> GlyphOutline {
        GlyphOutline {
            contours:   vec![],
            grid_size:  grid_size,
        }
    }

    ///
    /// Adds a contour to this outline
    ///
    pub fn with_contour(mut self, contour: Vec<QuadraticCurve>) -> GlyphOutline {
        self.contours.push(contour);
        self
    }

    ///
    /// Adds a closed polygon made of straight lines (represented as quadratic curves) to this outline
    ///
    pub fn with_polygon(self, points: &[[f32; 2]]) -> GlyphOutline {
        let contour = (0..points.len())
            .map(|idx| QuadraticCurve::line(points[idx], points[(idx+1) % points.len()]))
            .collect();

        self.with_contour(contour)
    }

    ///
    /// Computes the nonzero winding number of this outline at a point
    ///
    pub fn winding_number(&self, point: [f32; 2]) -> i32 {
        let px = point[0] as f64;
        let py = point[1] as f64;

        let mut winding = 0;

        for curve in self.contours.iter().flatten() {
            let [p0, p1, p2]    = curve.points;
            let (y0, y1, y2)    = (p0[1] as f64 - py, p1[1] as f64 - py, p2[1] as f64 - py);

            // Solve y(t) = 0 as a*t^2 + b*t + c = 0
            let a = y0 - 2.0*y1 + y2;
            let b = 2.0 * (y1 - y0);
            let c = y0;

            let mut roots: SmallVec<[f64; 2]> = smallvec![];
            if a.abs() < 1e-12 {
                if b.abs() > 1e-12 { roots.push(-c / b); }
            } else {
                let discriminant = b*b - 4.0*a*c;
                if discriminant >= 0.0 {
                    let sqrt_d = discriminant.sqrt();
                    roots.push((-b + sqrt_d) / (2.0*a));
                    roots.push((-b - sqrt_d) / (2.0*a));
                }
            }

            for t in roots {
                // Half-open range so joins between curves are only counted once
                if t < 0.0 || t >= 1.0 { continue; }

                let mt = 1.0 - t;
                let x  = mt*mt*(p0[0] as f64) + 2.0*t*mt*(p1[0] as f64) + t*t*(p2[0] as f64);
                let dy = 2.0*mt*(y1 - y0) + 2.0*t*(y2 - y1);

                if x > px && dy != 0.0 {
                    winding += if dy > 0.0 { 1 } else { -1 };
                }
            }
        }

        winding
    }
}

///
/// A glyph that has been laid out but not yet written to an atlas
///
struct PlacedGlyph {
    origin:         CurveOrigin,
    control_points: Vec<ControlPoint>,
    grid_min:       (usize, usize),
    grid_size:      (usize, usize),
    cells:          Vec<GridCell>,
}

///
/// Packs glyph outlines into a curve atlas
///
/// Each glyph is stored as a block: the first row holds the grid records followed by the control points, and
/// the acceleration grid (two texels per cell) is stored in the rows beneath. Blocks are packed into shelves.
///
pub struct AtlasBuilder {
    /// The width of the atlas to generate
    width: usize,

    /// Amount that each grid cell is expanded by when deciding which curves overlap it
    cell_padding: f32,

    /// The glyphs that have been added so far
    glyphs: Vec<PlacedGlyph>,

    /// Position of the next glyph block
    cursor: (usize, usize),

    /// Height of the current shelf
    shelf_height: usize,
}

impl AtlasBuilder {
    ///
    /// Creates a builder that will generate an atlas of the specified width
    ///
    pub fn new(width: usize) -> AtlasBuilder {
        AtlasBuilder {
            width:          width,
            cell_padding:   0.02,
            glyphs:         vec![],
            cursor:         (0, 0),
            shelf_height:   0,
        }
    }

    ///
    /// Changes the amount that grid cells are expanded by when finding the curves that overlap them
    ///
    pub fn with_cell_padding(mut self, padding: f32) -> AtlasBuilder {
        self.cell_padding = padding;
        self
    }

    ///
    /// Adds a glyph to the atlas, returning the origin that vertices should use to refer to it
    ///
    pub fn add_glyph(&mut self, outline: &GlyphOutline) -> Result<CurveOrigin, AtlasError> {
        let (grid_width, grid_height) = outline.grid_size;
        if grid_width == 0 || grid_height == 0 {
            return Err(AtlasError::EmptyGrid);
        }

        // Control points are written contiguously, with consecutive curves sharing their end and start points
        let mut control_points  = vec![];
        let mut curves          = vec![];

        for contour in outline.contours.iter() {
            for (idx, curve) in contour.iter().enumerate() {
                let [p0, p1, p2] = curve.points;

                if idx == 0 {
                    control_points.push(ControlPoint::from_normalized(p0[0], p0[1]));
                }

                let start_index = control_points.len() - 1 + FIRST_CURVE_INDEX as usize;
                if start_index > u8::MAX as usize {
                    return Err(AtlasError::TooManyCurves(start_index));
                }

                control_points.push(ControlPoint::from_normalized(p1[0], p1[1]));
                control_points.push(ControlPoint::from_normalized(p2[0], p2[1]));
                curves.push((start_index as u8, *curve));
            }
        }

        // Work out which curves overlap each cell
        let mut cells = vec![];
        for cell_y in 0..grid_height {
            for cell_x in 0..grid_width {
                let min_x = (cell_x as f32) / (grid_width as f32) - self.cell_padding;
                let max_x = ((cell_x+1) as f32) / (grid_width as f32) + self.cell_padding;
                let min_y = (cell_y as f32) / (grid_height as f32) - self.cell_padding;
                let max_y = ((cell_y+1) as f32) / (grid_height as f32) + self.cell_padding;

                let overlapping = curves.iter()
                    .filter(|(_, curve)| {
                        let (curve_min, curve_max) = curve.hull_bounds();
                        curve_min[0] <= max_x && curve_max[0] >= min_x && curve_min[1] <= max_y && curve_max[1] >= min_y
                    })
                    .map(|(index, _)| *index)
                    .collect::<SmallVec<[u8; MAX_CURVES_PER_CELL]>>();

                let mid         = GridCell::cell_mid([cell_x as f32, cell_y as f32], [grid_width as f32, grid_height as f32]);
                let mid_inside  = outline.winding_number(mid) != 0;
                let cell        = GridCell::encode(&overlapping, mid_inside)
                    .ok_or(AtlasError::TooManyCurvesInCell(cell_x, cell_y, overlapping.len()))?;

                cells.push(cell);
            }
        }

        // Place the block for this glyph
        let block_width     = (2 + control_points.len()).max(2 * grid_width);
        let block_height    = 1 + grid_height;

        if block_width > self.width {
            return Err(AtlasError::AtlasTooNarrow(block_width));
        }

        if self.cursor.0 + block_width > self.width {
            self.cursor         = (0, self.cursor.1 + self.shelf_height);
            self.shelf_height   = 0;
        }

        let (x, y) = self.cursor;
        if x > MAX_ORIGIN_COORD || y > MAX_ORIGIN_COORD {
            return Err(AtlasError::AtlasTooNarrow(block_width));
        }

        self.cursor.0       += block_width;
        self.shelf_height   = self.shelf_height.max(block_height);

        let origin = CurveOrigin { x: x as u16, y: y as u16 };
        self.glyphs.push(PlacedGlyph {
            origin:         origin,
            control_points: control_points,
            grid_min:       (x, y + 1),
            grid_size:      (grid_width, grid_height),
            cells:          cells,
        });

        Ok(origin)
    }

    ///
    /// Writes out the atlas containing all of the glyphs added so far
    ///
    pub fn build(&self) -> Result<CurveAtlas, AtlasError> {
        let height      = (self.cursor.1 + self.shelf_height).max(1);
        let mut texels  = vec![Texel::default(); self.width * height];

        for glyph in self.glyphs.iter() {
            let (x, y) = (glyph.origin.x as usize, glyph.origin.y as usize);

            // Grid records, then the control points
            texels[x + y*self.width]        = Texel::from_ushorts(glyph.grid_min.0 as u16, glyph.grid_min.1 as u16);
            texels[x + 1 + y*self.width]    = Texel::from_ushorts(glyph.grid_size.0 as u16, glyph.grid_size.1 as u16);

            for (idx, point) in glyph.control_points.iter().enumerate() {
                texels[x + 2 + idx + y*self.width] = point.to_texel();
            }

            // Acceleration grid: the first four indices for every cell, then the second four to the right
            let (grid_x, grid_y)            = glyph.grid_min;
            let (grid_width, grid_height)   = glyph.grid_size;

            for cell_y in 0..grid_height {
                for cell_x in 0..grid_width {
                    let cell    = &glyph.cells[cell_x + cell_y*grid_width];
                    let row     = (grid_y + cell_y) * self.width;

                    texels[grid_x + cell_x + row]               = Texel([cell.indices[0], cell.indices[1], cell.indices[2], cell.indices[3]]);
                    texels[grid_x + grid_width + cell_x + row]  = Texel([cell.indices[4], cell.indices[5], cell.indices[6], cell.indices[7]]);
                }
            }
        }

        log::debug!("Built curve atlas with {} glyphs ({} x {})", self.glyphs.len(), self.width, height);

        CurveAtlas::from_texels(self.width, height, texels)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn square(min: f32, max: f32) -> GlyphOutline {
        // Clockwise in a y-up space: up the left side, along the top, down the right
        GlyphOutline::new((1, 1)).with_polygon(&[[min, min], [min, max], [max, max], [max, min]])
    }

    #[test]
    fn winding_inside_square() {
        let outline = square(0.25, 0.75);

        assert!(outline.winding_number([0.5, 0.5]) != 0);
        assert!(outline.winding_number([0.1, 0.5]) == 0);
        assert!(outline.winding_number([0.9, 0.5]) == 0);
        assert!(outline.winding_number([0.5, 0.9]) == 0);
    }

    #[test]
    fn glyph_records_are_readable() {
        let mut builder = AtlasBuilder::new(64);
        let origin      = builder.add_glyph(&square(0.25, 0.75)).unwrap();
        let atlas       = builder.build().unwrap();
        let record      = GlyphRecord::read(&atlas, origin).unwrap();

        assert!(record.grid_size == [1.0, 1.0], "{:?}", record);
        assert!(record.grid_min == [0.0, 1.0], "{:?}", record);

        let cell = GridCell::read(&atlas, &record, [0.0, 0.0]).unwrap();
        assert!(cell.mid_inside());
        assert!(cell.curve_indices().count() == 4);

        let curves = cell.curve_indices().map(|idx| record.curve(&atlas, idx).unwrap()).collect::<Vec<_>>();
        for curve in curves.iter() {
            let (min, max) = curve.hull_bounds();
            assert!(min[0] >= 0.24 && max[0] <= 0.76, "{:?}", curve);
            assert!(min[1] >= 0.24 && max[1] <= 0.76, "{:?}", curve);
        }
    }

    #[test]
    fn second_glyph_placed_alongside_first() {
        let mut builder = AtlasBuilder::new(64);
        let first       = builder.add_glyph(&square(0.25, 0.75)).unwrap();
        let second      = builder.add_glyph(&square(0.1, 0.9)).unwrap();

        assert!(first == CurveOrigin { x: 0, y: 0 });
        assert!(second.x > first.x && second.y == first.y, "{:?}", second);

        let atlas = builder.build().unwrap();
        assert!(GlyphRecord::read(&atlas, second).is_some());
    }

    #[test]
    fn wrap_onto_new_shelf() {
        let mut builder = AtlasBuilder::new(12);
        let first       = builder.add_glyph(&square(0.25, 0.75)).unwrap();
        let second      = builder.add_glyph(&square(0.25, 0.75)).unwrap();

        assert!(first == CurveOrigin { x: 0, y: 0 });
        assert!(second == CurveOrigin { x: 0, y: 2 }, "{:?}", second);
    }

    #[test]
    fn reject_crowded_cell() {
        let mut builder = AtlasBuilder::new(256);
        let mut outline = GlyphOutline::new((1, 1));

        for idx in 0..3 {
            let min = 0.1 + (idx as f32) * 0.25;
            outline = outline.with_polygon(&[[min, 0.2], [min, 0.8], [min + 0.2, 0.8], [min + 0.2, 0.2]]);
        }

        assert!(builder.add_glyph(&outline) == Err(AtlasError::TooManyCurvesInCell(0, 0, 12)));
    }
}
