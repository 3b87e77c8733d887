mod decode_error;
mod vertex_stream;

pub use self::decode_error::*;
pub use self::vertex_stream::*;
