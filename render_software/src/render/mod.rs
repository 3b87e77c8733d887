mod renderer;
mod render_slice;
mod frame_size;
mod draw_call;
mod band_frame_renderer;
mod rgba_frame;
mod software_renderer;
mod image_render;
mod terminal_render;

pub use self::renderer::*;
pub use self::render_slice::*;
pub use self::frame_size::*;
pub use self::draw_call::*;
pub use self::band_frame_renderer::*;
pub use self::rgba_frame::*;
pub use self::software_renderer::*;
pub use self::image_render::*;
pub use self::terminal_render::*;
