mod strip;
mod triangle;
mod vertex_stage;
mod primitive;

pub use self::strip::*;
pub use self::triangle::*;
pub use self::vertex_stage::*;
pub use self::primitive::*;
