///
/// A 2x2 matrix, stored as rows
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Mat2 {
    pub rows: [[f32; 2]; 2],
}

impl Mat2 {
    ///
    /// Creates a matrix from its two column vectors
    ///
    #[inline]
    pub fn from_columns(col0: [f32; 2], col1: [f32; 2]) -> Mat2 {
        Mat2 { rows: [[col0[0], col1[0]], [col0[1], col1[1]]] }
    }

    ///
    /// A counter-clockwise rotation by `theta` radians
    ///
    #[inline]
    pub fn rotation(theta: f32) -> Mat2 {
        let (sin, cos) = theta.sin_cos();

        Mat2 { rows: [[cos, -sin], [sin, cos]] }
    }

    ///
    /// The matrix that maps the line from `from` to `to` onto the x axis, with `to` landing at `(1, 0)`
    ///
    /// Points are expected to be relative to `from`. Returns None if the two points are the same.
    ///
    #[inline]
    pub fn unit_line(from: [f32; 2], to: [f32; 2]) -> Option<Mat2> {
        let v       = [to[0] - from[0], to[1] - from[1]];
        let len_sq  = v[0]*v[0] + v[1]*v[1];

        if len_sq <= 0.0 || !len_sq.is_finite() {
            return None;
        }

        let v = [v[0] / len_sq, v[1] / len_sq];

        Some(Mat2 { rows: [[v[0], v[1]], [-v[1], v[0]]] })
    }

    ///
    /// The determinant of this matrix
    ///
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [[a, b], [c, d]] = self.rows;

        a*d - b*c
    }

    ///
    /// The inverse of this matrix, or None if it is singular
    ///
    #[inline]
    pub fn inverse(&self) -> Option<Mat2> {
        let [[a, b], [c, d]]    = self.rows;
        let det                 = self.determinant();

        if det == 0.0 || !det.is_finite() {
            return None;
        }

        Some(Mat2 { rows: [[d/det, -b/det], [-c/det, a/det]] })
    }

    ///
    /// Transforms a point by this matrix
    ///
    #[inline]
    pub fn transform(&self, p: [f32; 2]) -> [f32; 2] {
        let [[a, b], [c, d]] = self.rows;

        [a*p[0] + b*p[1], c*p[0] + d*p[1]]
    }

    ///
    /// Transforms all three points of a curve
    ///
    #[inline]
    pub fn transform_curve(&self, points: &[[f32; 2]; 3]) -> [[f32; 2]; 3] {
        [self.transform(points[0]), self.transform(points[1]), self.transform(points[2])]
    }
}
