use super::texel::*;

///
/// A control point in glyph-normalized space, quantized to 16 bits per axis
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ControlPoint {
    pub x: u16,
    pub y: u16,
}

impl ControlPoint {
    ///
    /// Creates a control point from a coordinate in the range 0..1 (values outside this range are clamped)
    ///
    pub fn from_normalized(x: f32, y: f32) -> ControlPoint {
        let quantize = |v: f32| (v.max(0.0).min(1.0) * 65535.0).round() as u16;

        ControlPoint { x: quantize(x), y: quantize(y) }
    }

    ///
    /// Reads a control point from an atlas texel
    ///
    #[inline]
    pub fn from_texel(texel: Texel) -> ControlPoint {
        let [x_hi, x_lo, y_hi, y_lo] = texel.0;

        ControlPoint {
            x: ((x_hi as u16) << 8) | (x_lo as u16),
            y: ((y_hi as u16) << 8) | (y_lo as u16),
        }
    }

    ///
    /// The texel that stores this control point
    ///
    #[inline]
    pub fn to_texel(&self) -> Texel {
        Texel::from_ushorts(self.x, self.y)
    }

    ///
    /// This control point mapped to the range 0..1
    ///
    #[inline]
    pub fn normalized(&self) -> [f32; 2] {
        [(self.x as f32) / 65535.0, (self.y as f32) / 65535.0]
    }
}

///
/// A quadratic bezier curve (start point, control point, end point)
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticCurve {
    pub points: [[f32; 2]; 3],
}

impl QuadraticCurve {
    ///
    /// Creates a new curve from its start, control and end points
    ///
    #[inline]
    pub fn new(start: [f32; 2], control: [f32; 2], end: [f32; 2]) -> QuadraticCurve {
        QuadraticCurve { points: [start, control, end] }
    }

    ///
    /// Creates a straight line represented as a quadratic curve (the control point is the midpoint)
    ///
    #[inline]
    pub fn line(start: [f32; 2], end: [f32; 2]) -> QuadraticCurve {
        let mid = [(start[0] + end[0]) * 0.5, (start[1] + end[1]) * 0.5];

        QuadraticCurve::new(start, mid, end)
    }

    /// The start point of this curve
    #[inline] pub fn start(&self) -> [f32; 2] { self.points[0] }

    /// The end point of this curve
    #[inline] pub fn end(&self) -> [f32; 2] { self.points[2] }

    ///
    /// The point on the curve at parameter `t`
    ///
    #[inline]
    pub fn position_at(&self, t: f32) -> [f32; 2] {
        let [p0, p1, p2] = self.points;

        [position_at(p0[0], p1[0], p2[0], t), position_at(p0[1], p1[1], p2[1], t)]
    }

    ///
    /// The first derivative of the curve at parameter `t`
    ///
    #[inline]
    pub fn tangent_at(&self, t: f32) -> [f32; 2] {
        let [p0, p1, p2] = self.points;

        [tangent_at(p0[0], p1[0], p2[0], t), tangent_at(p0[1], p1[1], p2[1], t)]
    }

    ///
    /// The bounding box of the control points (which always contains the curve), as (min, max)
    ///
    pub fn hull_bounds(&self) -> ([f32; 2], [f32; 2]) {
        let [p0, p1, p2] = self.points;

        (
            [p0[0].min(p1[0]).min(p2[0]), p0[1].min(p1[1]).min(p2[1])],
            [p0[0].max(p1[0]).max(p2[0]), p0[1].max(p1[1]).max(p2[1])],
        )
    }

    ///
    /// Returns this curve with every point offset by `-origin`
    ///
    #[inline]
    pub fn relative_to(&self, origin: [f32; 2]) -> QuadraticCurve {
        let [p0, p1, p2] = self.points;
        let offset = |p: [f32; 2]| [p[0] - origin[0], p[1] - origin[1]];

        QuadraticCurve { points: [offset(p0), offset(p1), offset(p2)] }
    }
}

///
/// Evaluates one axis of a quadratic bezier: `(1-t)^2 p0 + 2t(1-t) p1 + t^2 p2`
///
#[inline]
pub fn position_at(p0: f32, p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;

    mt*mt*p0 + 2.0*t*mt*p1 + t*t*p2
}

///
/// Evaluates the derivative of one axis of a quadratic bezier
///
#[inline]
pub fn tangent_at(p0: f32, p1: f32, p2: f32, t: f32) -> f32 {
    2.0 * (1.0-t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn control_point_texel_round_trip() {
        let point = ControlPoint { x: 513, y: 65534 };

        assert!(ControlPoint::from_texel(point.to_texel()) == point);
    }

    #[test]
    fn quantize_normalized_coordinates() {
        let point = ControlPoint::from_normalized(0.0, 1.0);
        assert!(point == ControlPoint { x: 0, y: 65535 });

        let point = ControlPoint::from_normalized(-0.5, 1.5);
        assert!(point == ControlPoint { x: 0, y: 65535 });
    }

    #[test]
    fn curve_end_points() {
        let curve = QuadraticCurve::new([0.0, 0.0], [0.5, 1.0], [1.0, 0.0]);

        assert!(curve.position_at(0.0) == [0.0, 0.0]);
        assert!(curve.position_at(1.0) == [1.0, 0.0]);
        assert!(curve.position_at(0.5) == [0.5, 0.5]);
        assert!(curve.tangent_at(0.5) == [1.0, 0.0]);
    }

    #[test]
    fn line_has_constant_tangent() {
        let line = QuadraticCurve::line([0.0, 0.0], [2.0, 4.0]);

        assert!(line.tangent_at(0.0) == [2.0, 4.0]);
        assert!(line.tangent_at(1.0) == [2.0, 4.0]);
    }
}
