///
/// Describes the size of a frame in pixels
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FrameSize {
    pub width:  usize,
    pub height: usize,
}

impl FrameSize {
    /// The size as a `(width, height)` pair
    #[inline] pub fn as_tuple(&self) -> (usize, usize) { (self.width, self.height) }

    /// The number of pixels in a frame of this size
    #[inline] pub fn pixel_count(&self) -> usize { self.width * self.height }
}

impl From<(usize, usize)> for FrameSize {
    #[inline]
    fn from((width, height): (usize, usize)) -> FrameSize {
        FrameSize { width, height }
    }
}
