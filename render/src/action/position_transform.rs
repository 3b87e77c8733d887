///
/// The multiply-add pair that maps vertex positions into normalized device coordinates (`pos * mul + add`)
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PositionTransform {
    pub mul: [f32; 2],
    pub add: [f32; 2],
}

impl PositionTransform {
    ///
    /// The transform that leaves positions unchanged
    ///
    pub fn identity() -> PositionTransform {
        PositionTransform { mul: [1.0, 1.0], add: [0.0, 0.0] }
    }

    ///
    /// Applies this transform to a point
    ///
    #[inline]
    pub fn apply(&self, pos: [f32; 2]) -> [f32; 2] {
        [pos[0] * self.mul[0] + self.add[0], pos[1] * self.mul[1] + self.add[1]]
    }
}
