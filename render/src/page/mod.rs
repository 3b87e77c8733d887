mod page_error;
mod page_descriptor;
mod page_layout;

pub use self::page_error::*;
pub use self::page_descriptor::*;
pub use self::page_layout::*;
