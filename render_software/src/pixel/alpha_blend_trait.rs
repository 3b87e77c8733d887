use flo_glyph_render::{BlendMode};

///
/// Trait implemented by pixel types that support alpha blending (with premultiplied alpha)
///
pub trait AlphaBlend : Sized + Copy {
    /// Draws this pixel over the top of another: `src + dest * (1 - src_alpha)`
    fn source_over(self, dest: Self) -> Self;

    ///
    /// Combines this pixel with the one already in the frame using a blend mode
    ///
    #[inline]
    fn blend(self, dest: Self, blend_mode: BlendMode) -> Self {
        match blend_mode {
            BlendMode::Opaque       => self,
            BlendMode::SourceOver   => self.source_over(dest),
        }
    }
}
