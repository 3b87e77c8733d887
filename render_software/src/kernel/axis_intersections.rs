/// Tolerance used to decide that a curve is degenerate along an axis (its control point is on the line between its end points)
const LINEAR_TOLERANCE: f32 = 1e-5;

///
/// The parameter values where one axis of a quadratic bezier curve crosses zero
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AxisIntersections {
    /// The curve never reaches zero on this axis
    None,

    /// The curve is linear on this axis and crosses zero once
    One(f32),

    /// The curve crosses zero (or touches it) at two parameter values
    Two(f32, f32),
}

impl AxisIntersections {
    ///
    /// The parameter values as a fixed-size list (unused entries are None)
    ///
    #[inline]
    pub fn values(&self) -> [Option<f32>; 2] {
        match self {
            AxisIntersections::None         => [None, None],
            AxisIntersections::One(t)       => [Some(*t), None],
            AxisIntersections::Two(t1, t2)  => [Some(*t1), Some(*t2)],
        }
    }
}

///
/// Solves `B(t) = 0` for one axis of a quadratic bezier curve with the values `p0`, `p1` and `p2`
///
/// When the quadratic term vanishes the curve is linear along this axis and a single root is returned. A curve
/// that doesn't move along the axis at all has no roots. This never produces NaN parameter values.
///
#[inline]
pub fn axis_intersections(p0: f32, p1: f32, p2: f32) -> AxisIntersections {
    if (p0 - (2.0*p1 - p2)).abs() < LINEAR_TOLERANCE {
        let slope = p2 - p1;

        if slope.abs() < 1e-12 {
            return AxisIntersections::None;
        }

        return AxisIntersections::One(0.5 * (p2 - 2.0*p1) / slope);
    }

    let sqrt_term = p1*p1 - p0*p2;
    if sqrt_term < 0.0 {
        return AxisIntersections::None;
    }

    let sqrt_term   = sqrt_term.sqrt();
    let denom       = p0 - 2.0*p1 + p2;

    AxisIntersections::Two((p0 - p1 + sqrt_term) / denom, (p0 - p1 - sqrt_term) / denom)
}
