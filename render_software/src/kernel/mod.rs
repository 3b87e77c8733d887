mod axis_intersections;
mod window;
mod basis;
mod atlas_sampler;
mod coverage_kernel;

pub use self::axis_intersections::*;
pub use self::window::*;
pub use self::basis::*;
pub use self::atlas_sampler::*;
pub use self::coverage_kernel::*;
