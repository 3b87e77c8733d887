use std::ops::{Range};

///
/// Specifies a band of rows of a frame to render
///
#[derive(Clone, Debug)]
pub struct RenderSlice {
    /// The width in pixels of a row
    pub width: usize,

    /// The height of the whole frame
    pub frame_height: usize,

    /// The rows that should be rendered to the buffer (the buffer holds `width` pixels for each of these)
    pub rows: Range<usize>,
}
