use super::axis_intersections::*;
use super::atlas_sampler::*;
use super::basis::*;
use super::window::*;

use flo_curve_atlas::*;

///
/// The result of evaluating the coverage of a pixel
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PixelCoverage {
    /// The fraction of the pixel that's inside the glyph (0..1)
    pub coverage: f32,

    /// The acceleration grid cell that was used (for the debug overlay)
    pub cell: [f32; 2],
}

impl PixelCoverage {
    /// A pixel that's entirely outside the glyph
    pub const EMPTY: PixelCoverage = PixelCoverage { coverage: 0.0, cell: [0.0, 0.0] };

    ///
    /// Applies this coverage to a tint colour (non-premultiplied RGBA)
    ///
    /// With `show_grids` set, the cells of the acceleration grid are overlaid in a checkerboard pattern.
    ///
    #[inline]
    pub fn shade(&self, tint: [f32; 4], show_grids: bool) -> [f32; 4] {
        let [mut r, g, b, mut a] = tint;
        a *= self.coverage;

        if show_grids {
            let grid_x  = self.cell[0].floor().rem_euclid(2.0);
            let grid_y  = self.cell[1].floor().rem_euclid(2.0);
            let diff    = grid_x - grid_y;

            r = diff * diff;
            a += 0.3;
        }

        [r, g, b, a.min(1.0)]
    }
}

///
/// Evaluates the coverage of a pixel by a glyph, by casting `N` rays across the pixel and finding where
/// they cross the curves of the glyph analytically
///
/// The rays are spread evenly over half a turn, and each crossing is weighted by a parabolic window centred on
/// the pixel. Whether the start of each ray is inside the glyph is worked out from the nearest crossing, or
/// if there are none from a probe towards the centre of the grid cell (whose inside/outside state is stored in
/// the atlas).
///
#[derive(Clone, Copy, Debug)]
pub struct CoverageKernel<const N: usize> {
    /// Rotation between successive rays
    ray_rotation: Mat2,
}

/// The kernel used by the renderer: 4 rays per pixel
pub type DefaultCoverageKernel = CoverageKernel<4>;

impl<const N: usize> Default for CoverageKernel<N> {
    fn default() -> CoverageKernel<N> {
        CoverageKernel::new()
    }
}

impl<const N: usize> CoverageKernel<N> {
    ///
    /// Creates a new coverage kernel
    ///
    pub fn new() -> CoverageKernel<N> {
        let theta = std::f32::consts::PI / (N.max(1) as f32);

        CoverageKernel {
            ray_rotation: Mat2::rotation(theta),
        }
    }

    /// The number of rays cast per pixel
    #[inline] pub fn num_rays(&self) -> usize { N }

    ///
    /// Works out the coverage of a pixel
    ///
    /// `norm_coord` is the glyph-normalized coordinate of the pixel centre, and `dfdx`/`dfdy` are its rate of
    /// change per pixel horizontally and vertically (with y increasing upwards). Malformed atlas data produces a
    /// coverage of 0.
    ///
    pub fn evaluate(&self, glyph: &GlyphSampler, norm_coord: [f32; 2], dfdx: [f32; 2], dfdy: [f32; 2]) -> PixelCoverage {
        let cell = match glyph.sample(norm_coord) {
            Some(cell)  => cell,
            None        => { return PixelCoverage::EMPTY; }
        };

        let coverage = self.evaluate_cell(&cell, norm_coord, dfdx, dfdy);

        PixelCoverage { coverage, cell: cell.cell }
    }

    ///
    /// Works out the coverage of a pixel from a cell that's already been read from the atlas
    ///
    pub fn evaluate_cell(&self, cell: &SampledCell, norm_coord: [f32; 2], dfdx: [f32; 2], dfdy: [f32; 2]) -> f32 {
        // Maps glyph space to pixel space (where the pixel window is the unit circle)
        let to_pixel = match Mat2::from_columns(dfdx, dfdy).inverse() {
            Some(to_pixel)  => to_pixel,
            None            => { return 0.0; }
        };

        // Maps the line from the pixel to the centre of the cell to the unit x axis
        let to_mid              = Mat2::unit_line(norm_coord, cell.cell_mid);

        let mut mid_closest     = if cell.grid_cell.mid_inside() { -2.0 } else { 2.0 };
        let mut first_crossing  = [2.0f32; N];
        let mut coverage        = 0.0;

        for curve in cell.curves.iter() {
            if let Some(to_mid) = &to_mid {
                update_closest_crossing(&to_mid.transform_curve(curve), &mut mid_closest);
            }

            let mut points = to_pixel.transform_curve(curve);

            for ray_idx in 0..N {
                let [p0, p1, p2] = points;

                for t in axis_intersections(p0[0], p1[0], p2[0]).values().iter().flatten() {
                    let t = *t;
                    if !(t > 0.0 && t <= 1.0) { continue; }

                    let deriv_x = tangent_at(p0[0], p1[0], p2[0], t);
                    let pos_y   = position_at(p0[1], p1[1], p2[1], t);

                    if pos_y > -1.0 && pos_y < 1.0 {
                        // Curves travelling in -x enter the glyph as the ray moves up
                        let delta = integrate_window(pos_y);
                        coverage += if deriv_x < 0.0 { delta } else { -delta };

                        let crossing_dist = pos_y + 1.0;
                        if crossing_dist < first_crossing[ray_idx].abs() {
                            first_crossing[ray_idx] = if deriv_x < 0.0 { -crossing_dist } else { crossing_dist };
                        }
                    }
                }

                if ray_idx + 1 < N {
                    points = self.ray_rotation.transform_curve(&points);
                }
            }
        }

        // Rays that start inside the glyph cover the whole window, less anything removed by their crossings
        let mid_inside = mid_closest < 0.0;
        for crossing in first_crossing.iter() {
            let crossing = *crossing;

            if (crossing >= 2.0 && mid_inside) || (crossing > 0.0 && crossing.abs() < 2.0) {
                coverage += 1.0;
            }
        }

        (coverage / (N as f32)).max(0.0).min(1.0)
    }
}

///
/// Finds the nearest point where a curve crosses the positive x axis (up to `closest`), signed negative if
/// the curve is moving downwards at that point
///
#[inline]
fn update_closest_crossing(points: &[[f32; 2]; 3], closest: &mut f32) {
    let [p0, p1, p2] = *points;

    for t in axis_intersections(p0[1], p1[1], p2[1]).values().iter().flatten() {
        let t = *t;
        if !(t > 0.0 && t < 1.0) { continue; }

        let pos_x = position_at(p0[0], p1[0], p2[0], t);
        if pos_x > 0.0 && pos_x < closest.abs() {
            let deriv_y = tangent_at(p0[1], p1[1], p2[1], t);
            *closest = if deriv_y < 0.0 { -pos_x } else { pos_x };
        }
    }
}
