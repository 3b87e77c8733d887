mod vertex;
mod glyph_vertex_buffer;

pub use self::vertex::*;
pub use self::glyph_vertex_buffer::*;
