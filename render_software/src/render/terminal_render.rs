#[cfg(feature="render_term")]
mod term_render {
    use super::super::image_render::*;
    use super::super::rgba_frame::*;

    ///
    /// Displays a frame inline in the terminal
    ///
    /// (This version only supports the iterm escape sequence)
    ///
    pub fn show_in_terminal(frame: &RgbaFrame) -> Result<(), png::EncodingError> {
        use base64::engine::{Engine};
        use base64::engine::general_purpose;

        let png_data    = encode_png(frame)?;
        let base64      = general_purpose::STANDARD_NO_PAD.encode(&png_data);

        print!("\x1b]1337;File=inline=1:{}\x07", base64);

        Ok(())
    }
}

#[cfg(feature="render_term")]
pub use term_render::*;
