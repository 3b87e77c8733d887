mod alpha_blend_trait;
mod f32_linear;

pub use self::alpha_blend_trait::*;
pub use self::f32_linear::*;
