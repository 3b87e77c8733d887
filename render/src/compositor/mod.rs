mod resource_error;
mod render_resources;
mod page_compositor;

pub use self::resource_error::*;
pub use self::render_resources::*;
pub use self::page_compositor::*;
