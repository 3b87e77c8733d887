use super::alpha_blend_trait::*;

use wide::*;

///
/// A pixel using floating-point components, with the alpha value pre-multiplied
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32LinearPixel(f32x4);

impl Default for F32LinearPixel {
    #[inline]
    fn default() -> Self {
        F32LinearPixel(f32x4::splat(0.0))
    }
}

impl F32LinearPixel {
    ///
    /// An opaque white pixel
    ///
    #[inline]
    pub fn white() -> F32LinearPixel {
        F32LinearPixel(f32x4::new([1.0, 1.0, 1.0, 1.0]))
    }

    ///
    /// Creates a pixel from non-premultiplied RGBA components
    ///
    #[inline]
    pub fn from_straight_rgba(rgba: [f32; 4]) -> F32LinearPixel {
        let alpha = rgba[3];

        F32LinearPixel(f32x4::new(rgba) * f32x4::new([alpha, alpha, alpha, 1.0]))
    }

    ///
    /// Converts this pixel to non-premultiplied RGBA bytes
    ///
    #[inline]
    pub fn to_rgba_u8(&self) -> [u8; 4] {
        let rgba    = self.0.min(f32x4::ONE).max(f32x4::ZERO);
        let alpha   = rgba.as_array_ref()[3];
        let rgba    = if alpha > 0.0 { rgba / f32x4::new([alpha, alpha, alpha, 1.0]) } else { rgba };
        let rgba    = (rgba.min(f32x4::ONE) * 255.0).round();

        let [r, g, b, a] = rgba.to_array();
        [r as u8, g as u8, b as u8, a as u8]
    }
}

impl AlphaBlend for F32LinearPixel {
    #[inline]
    fn source_over(self, dest: Self) -> Self {
        let src_alpha = self.0.as_array_ref()[3];

        F32LinearPixel(self.0 + dest.0*(1.0-src_alpha))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use flo_glyph_render::*;

    #[test]
    fn half_transparent_over_white() {
        let src     = F32LinearPixel::from_straight_rgba([0.0, 0.0, 0.0, 0.5]);
        let blended = src.source_over(F32LinearPixel::white());

        assert!(blended.to_rgba_u8() == [128, 128, 128, 255], "{:?}", blended.to_rgba_u8());
    }

    #[test]
    fn opaque_replaces() {
        let src = F32LinearPixel::from_straight_rgba([1.0, 0.0, 0.0, 1.0]);

        assert!(src.blend(F32LinearPixel::white(), BlendMode::Opaque) == src);
        assert!(src.blend(F32LinearPixel::white(), BlendMode::SourceOver) == src);
    }

    #[test]
    fn straight_round_trip() {
        let pixel = F32LinearPixel::from_straight_rgba([1.0, 0.5, 0.0, 0.5]);

        assert!(pixel.to_rgba_u8() == [255, 128, 0, 128], "{:?}", pixel.to_rgba_u8());
    }
}
