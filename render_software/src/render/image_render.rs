#[cfg(feature="render_png")]
mod render_png {
    use super::super::rgba_frame::*;

    use std::io::{Write, BufWriter};

    ///
    /// Writes a frame to a stream as a PNG file (non-premultiplied RGBA, 8 bits per channel)
    ///
    pub fn write_png<TStream>(frame: &RgbaFrame, target: TStream) -> Result<(), png::EncodingError>
    where
        TStream: Write,
    {
        let mut encoder = png::Encoder::new(BufWriter::new(target), frame.width() as u32, frame.height() as u32);

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&frame.to_rgba_bytes())?;
        writer.finish()?;

        Ok(())
    }

    ///
    /// Encodes a frame as the bytes of a PNG file
    ///
    pub fn encode_png(frame: &RgbaFrame) -> Result<Vec<u8>, png::EncodingError> {
        let mut png_data = vec![];
        write_png(frame, &mut png_data)?;

        Ok(png_data)
    }
}

#[cfg(feature="render_png")]
pub use render_png::*;
