use super::frame_size::*;

use crate::pixel::*;

///
/// A frame of pixels with premultiplied alpha, which can be read back as non-premultiplied RGBA bytes
///
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    size:   FrameSize,
    pixels: Vec<F32LinearPixel>,
}

impl RgbaFrame {
    ///
    /// Creates a transparent frame of the specified size
    ///
    pub fn new(size: FrameSize) -> RgbaFrame {
        RgbaFrame {
            size:   size,
            pixels: vec![F32LinearPixel::default(); size.pixel_count()],
        }
    }

    /// The size of this frame
    #[inline] pub fn size(&self) -> FrameSize { self.size }

    /// The width of this frame in pixels
    #[inline] pub fn width(&self) -> usize { self.size.width }

    /// The height of this frame in pixels
    #[inline] pub fn height(&self) -> usize { self.size.height }

    /// The pixels of this frame, row by row from the top
    #[inline] pub fn pixels(&self) -> &[F32LinearPixel] { &self.pixels }

    /// The pixels of this frame, for rendering
    #[inline] pub fn pixels_mut(&mut self) -> &mut [F32LinearPixel] { &mut self.pixels }

    ///
    /// Changes the size of this frame (the contents are cleared to transparent)
    ///
    pub fn resize(&mut self, size: FrameSize) {
        self.size = size;
        self.pixels.clear();
        self.pixels.resize(size.pixel_count(), F32LinearPixel::default());
    }

    ///
    /// Fills the frame with a single colour
    ///
    pub fn clear(&mut self, color: F32LinearPixel) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = color);
    }

    ///
    /// Reads a pixel as non-premultiplied RGBA bytes
    ///
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }

        self.pixels.get(y*self.size.width + x).map(|pixel| pixel.to_rgba_u8())
    }

    ///
    /// Converts the frame to non-premultiplied RGBA bytes, 4 per pixel, row by row from the top
    ///
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);

        for pixel in self.pixels.iter() {
            bytes.extend_from_slice(&pixel.to_rgba_u8());
        }

        bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cleared_frame_reads_back() {
        let mut frame = RgbaFrame::new(FrameSize { width: 4, height: 2 });
        frame.clear(F32LinearPixel::from_straight_rgba([1.0, 0.0, 0.0, 1.0]));

        assert!(frame.pixel(3, 1) == Some([255, 0, 0, 255]));
        assert!(frame.pixel(4, 1).is_none());
        assert!(frame.to_rgba_bytes().len() == 4*2*4);
    }
}
