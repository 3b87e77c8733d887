use std::ops::{Range};

///
/// A value that varies linearly across a triangle, described by its value at a point and its gradient
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AffinePlane {
    /// Point where the value is `value`
    origin: [f32; 2],

    /// Value at the origin
    value: f32,

    /// Rate of change per pixel to the right
    pub ddx: f32,

    /// Rate of change per pixel downwards (per row)
    pub ddy: f32,
}

impl AffinePlane {
    ///
    /// Evaluates this plane at a point
    ///
    #[inline]
    pub fn value_at(&self, x: f32, y: f32) -> f32 {
        self.value + self.ddx * (x - self.origin[0]) + self.ddy * (y - self.origin[1])
    }
}

///
/// A triangle in pixel coordinates (y increasing downwards), set up for rasterisation
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScreenTriangle {
    /// The corners of the triangle in the order they were supplied
    points: [[f32; 2]; 3],

    /// Twice the signed area of the triangle
    double_area: f32,

    /// The corners reordered so that the edge functions are positive inside the triangle
    edges: [[f32; 2]; 3],
}

///
/// Evaluates the edge function for the line from `a` to `b` at `p`
///
#[inline]
fn edge_function(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}

///
/// True if a pixel centre that lies exactly on the edge from `a` to `b` belongs to the triangle
///
/// Two triangles that share an edge traverse it in opposite directions, so exactly one of them owns the pixels
/// on it.
///
#[inline]
fn owns_edge(a: [f32; 2], b: [f32; 2]) -> bool {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];

    dy > 0.0 || (dy == 0.0 && dx < 0.0)
}

impl ScreenTriangle {
    ///
    /// Sets up a triangle for rasterisation, returning None if it has no area
    ///
    pub fn new(points: [[f32; 2]; 3]) -> Option<ScreenTriangle> {
        let double_area = edge_function(points[0], points[1], points[2]);

        if double_area == 0.0 || !double_area.is_finite() {
            return None;
        }

        let edges = if double_area > 0.0 { points } else { [points[0], points[2], points[1]] };

        Some(ScreenTriangle { points, double_area, edges })
    }

    /// The corners of this triangle
    #[inline] pub fn points(&self) -> &[[f32; 2]; 3] { &self.points }

    ///
    /// The rows whose pixel centres might be covered by this triangle, limited to a frame of the specified height
    ///
    pub fn rows(&self, height: usize) -> Range<usize> {
        let min_y = self.points.iter().map(|p| p[1]).fold(f32::MAX, f32::min);
        let max_y = self.points.iter().map(|p| p[1]).fold(f32::MIN, f32::max);

        pixel_span(min_y, max_y, height)
    }

    ///
    /// The columns whose pixel centres might be covered by this triangle, limited to a frame of the specified width
    ///
    pub fn columns(&self, width: usize) -> Range<usize> {
        let min_x = self.points.iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        let max_x = self.points.iter().map(|p| p[0]).fold(f32::MIN, f32::max);

        pixel_span(min_x, max_x, width)
    }

    ///
    /// True if the centre of the pixel at the specified position is inside this triangle
    ///
    #[inline]
    pub fn covers(&self, x: usize, y: usize) -> bool {
        let p       = [(x as f32) + 0.5, (y as f32) + 0.5];
        let [a, b, c] = self.edges;

        [(a, b), (b, c), (c, a)].iter().all(|(from, to)| {
            let weight = edge_function(*from, *to, p);

            weight > 0.0 || (weight == 0.0 && owns_edge(*from, *to))
        })
    }

    ///
    /// Creates the plane that interpolates the specified values (one per corner, in the order the corners were supplied)
    ///
    pub fn plane(&self, values: [f32; 3]) -> AffinePlane {
        let [p0, p1, p2]    = self.points;
        let [f0, f1, f2]    = values;
        let d               = self.double_area;

        let ddx = ((f1 - f0) * (p2[1] - p0[1]) - (f2 - f0) * (p1[1] - p0[1])) / d;
        let ddy = ((f2 - f0) * (p1[0] - p0[0]) - (f1 - f0) * (p2[0] - p0[0])) / d;

        AffinePlane { origin: p0, value: f0, ddx, ddy }
    }
}

///
/// The pixels whose centres lie in the range `min..=max`, clamped to `0..limit`
///
#[inline]
fn pixel_span(min: f32, max: f32, limit: usize) -> Range<usize> {
    if !min.is_finite() || !max.is_finite() || max < 0.0 {
        return 0..0;
    }

    let start   = (min - 0.5).ceil().max(0.0);
    let end     = ((max - 0.5).floor() + 1.0).max(0.0);
    let start   = (start as usize).min(limit);
    let end     = (end as usize).min(limit);

    start..end.max(start)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn degenerate_triangle_is_rejected() {
        assert!(ScreenTriangle::new([[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]).is_none());
    }

    #[test]
    fn shared_edge_is_drawn_once() {
        // Two triangles forming the square 0..4, split along the diagonal (which passes through pixel centres)
        let first   = ScreenTriangle::new([[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]).unwrap();
        let second  = ScreenTriangle::new([[4.0, 0.0], [0.0, 4.0], [4.0, 4.0]]).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let count = [first.covers(x, y), second.covers(x, y)].iter().filter(|covered| **covered).count();
                assert!(count == 1, "Pixel {}, {} covered {} times", x, y, count);
            }
        }
    }

    #[test]
    fn plane_interpolates_corners() {
        let triangle    = ScreenTriangle::new([[0.0, 0.0], [10.0, 0.0], [0.0, 20.0]]).unwrap();
        let plane       = triangle.plane([1.0, 2.0, 5.0]);

        assert!((plane.ddx - 0.1).abs() < 1e-6, "{:?}", plane);
        assert!((plane.ddy - 0.2).abs() < 1e-6, "{:?}", plane);
        assert!((plane.value_at(10.0, 0.0) - 2.0).abs() < 1e-6);
        assert!((plane.value_at(0.0, 20.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn rows_cover_pixel_centres() {
        let triangle = ScreenTriangle::new([[0.0, 0.2], [10.0, 0.2], [0.0, 3.4]]).unwrap();

        assert!(triangle.rows(100) == (0..3), "{:?}", triangle.rows(100));
        assert!(triangle.rows(2) == (0..2));
    }
}
