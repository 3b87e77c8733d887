mod color;
mod identities;
mod blend_mode;
mod shader_type;
mod position_transform;
mod render_action;
mod render_action_type;

pub use self::color::*;
pub use self::identities::*;
pub use self::blend_mode::*;
pub use self::shader_type::*;
pub use self::position_transform::*;
pub use self::render_action::*;
pub use self::render_action_type::*;
