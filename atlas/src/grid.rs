use super::glyph::*;
use super::surface::*;

/// The maximum number of curves that can be listed in a single grid cell
pub const MAX_CURVES_PER_CELL: usize = 8;

///
/// The curve indices stored for a single cell of a glyph's acceleration grid
///
/// Indices are split into two groups of four (one RGBA texel each). The ordering of the first group also
/// encodes two flags: whether the second group is in use (`indices[0] < indices[1]`) and whether the centre
/// of the cell is inside the glyph (`indices[2] < indices[3]`). Values below 2 are 'no entry' sentinels.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridCell {
    pub indices: [u8; MAX_CURVES_PER_CELL],
}

impl GridCell {
    ///
    /// Finds the integer cell containing a glyph-normalized coordinate (coordinates outside the glyph are clamped to the nearest cell)
    ///
    #[inline]
    pub fn cell_for_coordinate(norm_coord: [f32; 2], grid_size: [f32; 2]) -> [f32; 2] {
        let clamp = |v: f32, size: f32| v.max(0.5).min(size - 0.5).floor();

        [
            clamp(norm_coord[0] * grid_size[0], grid_size[0]),
            clamp(norm_coord[1] * grid_size[1], grid_size[1]),
        ]
    }

    ///
    /// The centre of a cell in glyph-normalized coordinates
    ///
    #[inline]
    pub fn cell_mid(cell: [f32; 2], grid_size: [f32; 2]) -> [f32; 2] {
        [(cell[0] + 0.5) / grid_size[0], (cell[1] + 0.5) / grid_size[1]]
    }

    ///
    /// Reads the cell at an integer cell coordinate from a glyph's grid
    ///
    /// The second group of indices is only read if the first indicates that it's in use. Returns None if a
    /// texel that's needed lies outside of the atlas.
    ///
    pub fn read(atlas: &CurveAtlas, glyph: &GlyphRecord, cell: [f32; 2]) -> Option<GridCell> {
        let x       = (glyph.grid_min[0] + cell[0]) as usize;
        let y       = (glyph.grid_min[1] + cell[1]) as usize;
        let first   = atlas.texel(x, y)?.0;

        let mut indices = [0u8; MAX_CURVES_PER_CELL];
        indices[0..4].copy_from_slice(&first);

        if first[0] < first[1] {
            let second = atlas.texel(x + glyph.grid_size[0] as usize, y)?.0;
            indices[4..8].copy_from_slice(&second);
        }

        Some(GridCell { indices })
    }

    ///
    /// Creates the slot layout for a cell containing the specified curves
    ///
    /// Curves are identified by the index of their first control point (so must be at least 2). Returns None
    /// if there are more curves than can fit in a cell.
    ///
    pub fn encode(curves: &[u8], mid_inside: bool) -> Option<GridCell> {
        if curves.len() > MAX_CURVES_PER_CELL {
            return None;
        }

        let mut sorted = curves.to_vec();
        sorted.sort_unstable();

        let mut indices = [0u8; MAX_CURVES_PER_CELL];

        // The first pair is ascending when the second group is in use and descending (or equal) otherwise
        let more_than_four = sorted.len() > 4;
        match sorted.len() {
            0       => { }
            1       => { indices[0] = sorted[0]; }
            _       => {
                if more_than_four {
                    indices[0] = sorted[0];
                    indices[1] = sorted[1];
                } else {
                    indices[0] = sorted[1];
                    indices[1] = sorted[0];
                }
            }
        }

        // The second pair is ascending if the middle of the cell is inside the glyph
        let rest = if sorted.len() > 2 { &sorted[2..sorted.len().min(4)] } else { &[][..] };
        let (a, b) = match rest {
            [r0, r1]    => (*r0, *r1),
            [r0]        => (0, *r0),
            _           => (0, 1),
        };
        if mid_inside {
            indices[2] = a;
            indices[3] = b;
        } else if rest.is_empty() {
            indices[2] = 0;
            indices[3] = 0;
        } else {
            indices[2] = b;
            indices[3] = a;
        }

        // Anything left over goes into the second group
        if more_than_four {
            for (slot, curve) in sorted[4..].iter().enumerate() {
                indices[4 + slot] = *curve;
            }
        }

        Some(GridCell { indices })
    }

    ///
    /// True if this cell lists more than four curves (so the second group of indices should be read)
    ///
    #[inline]
    pub fn more_than_four(&self) -> bool {
        self.indices[0] < self.indices[1]
    }

    ///
    /// True if the centre of this cell is inside the glyph
    ///
    #[inline]
    pub fn mid_inside(&self) -> bool {
        self.indices[2] < self.indices[3]
    }

    ///
    /// The curve indices listed in this cell, with the sentinel entries skipped
    ///
    #[inline]
    pub fn curve_indices<'a>(&'a self) -> impl 'a + Iterator<Item=u8> {
        let num_slots = if self.more_than_four() { MAX_CURVES_PER_CELL } else { 4 };

        self.indices[0..num_slots].iter()
            .copied()
            .filter(|idx| *idx >= FIRST_CURVE_INDEX)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn check_encoding(curves: &[u8], mid_inside: bool) {
        let cell = GridCell::encode(curves, mid_inside).unwrap();

        let mut found   = cell.curve_indices().collect::<Vec<_>>();
        let mut wanted  = curves.to_vec();
        found.sort();
        wanted.sort();

        assert!(found == wanted, "{:?} (from {:?}) != {:?}", found, cell, wanted);
        assert!(cell.mid_inside() == mid_inside, "{:?} should have mid_inside == {}", cell, mid_inside);
        assert!(cell.more_than_four() == (curves.len() > 4), "{:?}", cell);
    }

    #[test]
    fn encode_all_sizes() {
        let curves = [2, 4, 6, 8, 10, 12, 14, 16];

        for len in 0..=8 {
            check_encoding(&curves[0..len], true);
            check_encoding(&curves[0..len], false);
        }
    }

    #[test]
    fn encode_unsorted() {
        check_encoding(&[40, 2, 18, 6, 100], true);
        check_encoding(&[40, 2, 18], false);
    }

    #[test]
    fn too_many_curves() {
        assert!(GridCell::encode(&[2, 3, 4, 5, 6, 7, 8, 9, 10], false).is_none());
    }

    #[test]
    fn all_sentinels_has_no_curves() {
        let cell = GridCell { indices: [0; 8] };

        assert!(cell.curve_indices().count() == 0);
        assert!(!cell.mid_inside());
        assert!(!cell.more_than_four());
    }

    #[test]
    fn second_group_ignored_without_flag() {
        let cell = GridCell { indices: [6, 4, 0, 0, 8, 10, 12, 14] };

        assert!(cell.curve_indices().collect::<Vec<_>>() == vec![6, 4]);
    }

    #[test]
    fn clamp_coordinates_to_grid() {
        assert!(GridCell::cell_for_coordinate([-0.1, 1.1], [4.0, 4.0]) == [0.0, 3.0]);
        assert!(GridCell::cell_for_coordinate([0.3, 0.6], [4.0, 4.0]) == [1.0, 2.0]);
        assert!(GridCell::cell_mid([1.0, 2.0], [4.0, 4.0]) == [0.375, 0.625]);
    }
}
