use super::texel::*;
use super::error::*;

use std::sync::*;

/// Size of the bitmap header that precedes the texel data in an atlas file
pub const BITMAP_HEADER_SIZE: usize = 54;

///
/// A curve atlas: a 2D surface of RGBA texels encoding glyph curves and their acceleration grids
///
/// The atlas is immutable once it has been loaded: cloning it shares the texel data.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CurveAtlas {
    width:  usize,
    height: usize,
    texels: Arc<Vec<Texel>>,
}

impl CurveAtlas {
    ///
    /// Creates an atlas from a set of texels, stored in rows starting at the top of the surface
    ///
    pub fn from_texels(width: usize, height: usize, texels: Vec<Texel>) -> Result<CurveAtlas, AtlasError> {
        if width == 0 || height == 0 {
            return Err(AtlasError::EmptySurface);
        }

        let needed = width * height;
        if texels.len() < needed {
            return Err(AtlasError::NotEnoughTexels(needed, texels.len()));
        }

        let mut texels = texels;
        texels.truncate(needed);

        Ok(CurveAtlas {
            width:  width,
            height: height,
            texels: Arc::new(texels),
        })
    }

    ///
    /// Creates an atlas from raw RGBA bytes
    ///
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<CurveAtlas, AtlasError> {
        if bytes.len() % 4 != 0 {
            return Err(AtlasError::PartialTexel);
        }

        let texels = bytes.chunks_exact(4)
            .map(|rgba| Texel([rgba[0], rgba[1], rgba[2], rgba[3]]))
            .collect::<Vec<_>>();

        Self::from_texels(width, height, texels)
    }

    ///
    /// Loads an atlas stored in a bitmap container
    ///
    /// Only the dimensions are read from the header (16-bit little-endian values at offsets 18 and 22): the
    /// pixel data that follows the header is taken as raw RGBA texels, with the first row at the top.
    ///
    pub fn from_bmp_bytes(bytes: &[u8]) -> Result<CurveAtlas, AtlasError> {
        if bytes.len() < BITMAP_HEADER_SIZE {
            return Err(AtlasError::MissingHeader);
        }

        let width   = u16::from_le_bytes([bytes[18], bytes[19]]) as usize;
        let height  = u16::from_le_bytes([bytes[22], bytes[23]]) as usize;
        let data    = &bytes[BITMAP_HEADER_SIZE..];
        let data    = &data[0..(data.len() - data.len()%4)];

        let atlas   = Self::from_rgba_bytes(width, height, data)?;
        log::info!("Loaded curve atlas: {} x {}", width, height);

        Ok(atlas)
    }

    ///
    /// Writes this atlas out in the bitmap container format read by `from_bmp_bytes`
    ///
    pub fn to_bmp_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; BITMAP_HEADER_SIZE];

        bytes[0]        = b'B';
        bytes[1]        = b'M';
        bytes[18..20].copy_from_slice(&(self.width as u16).to_le_bytes());
        bytes[22..24].copy_from_slice(&(self.height as u16).to_le_bytes());
        bytes.extend(self.texels.iter().flat_map(|texel| texel.0));

        bytes
    }

    /// The width of this atlas in texels
    #[inline] pub fn width(&self) -> usize { self.width }

    /// The height of this atlas in texels
    #[inline] pub fn height(&self) -> usize { self.height }

    ///
    /// The size of a single texel in normalized texture coordinates (reciprocal of the surface dimensions)
    ///
    #[inline]
    pub fn texel_size(&self) -> [f32; 2] {
        [1.0 / (self.width as f32), 1.0 / (self.height as f32)]
    }

    ///
    /// Reads the texel at an integer coordinate, or None if the coordinate is outside of the surface
    ///
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Option<Texel> {
        if x < self.width && y < self.height {
            Some(self.texels[x + y*self.width])
        } else {
            None
        }
    }

    ///
    /// Reads the texel at a floating-point texel coordinate (the coordinate is truncated to the containing texel)
    ///
    #[inline]
    pub fn texel_at(&self, x: f32, y: f32) -> Option<Texel> {
        if x >= 0.0 && y >= 0.0 {
            self.texel(x as usize, y as usize)
        } else {
            None
        }
    }

    ///
    /// Reads the two 16-bit values stored at a texel coordinate
    ///
    #[inline]
    pub fn fetch_ushort_pair(&self, x: usize, y: usize) -> Option<[f32; 2]> {
        self.texel(x, y).map(|texel| texel.ushort_pair())
    }

    ///
    /// Reads the two 16-bit values stored at a texel coordinate, mapped to the range 0..1
    ///
    #[inline]
    pub fn fetch_normalized_pair(&self, x: usize, y: usize) -> Option<[f32; 2]> {
        self.texel(x, y).map(|texel| texel.normalized_pair())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reject_short_data() {
        let atlas = CurveAtlas::from_texels(4, 4, vec![Texel::default(); 15]);

        assert!(atlas == Err(AtlasError::NotEnoughTexels(16, 15)), "{:?}", atlas);
    }

    #[test]
    fn reject_empty_surface() {
        assert!(CurveAtlas::from_texels(0, 4, vec![]) == Err(AtlasError::EmptySurface));
    }

    #[test]
    fn outside_texels_are_none() {
        let atlas = CurveAtlas::from_texels(2, 2, vec![Texel([1, 2, 3, 4]); 4]).unwrap();

        assert!(atlas.texel(1, 1) == Some(Texel([1, 2, 3, 4])));
        assert!(atlas.texel(2, 0).is_none());
        assert!(atlas.texel(0, 2).is_none());
        assert!(atlas.texel_at(-0.5, 0.0).is_none());
    }

    #[test]
    fn bitmap_round_trip() {
        let texels  = (0..12u8).map(|idx| Texel([idx, idx+1, idx+2, idx+3])).collect::<Vec<_>>();
        let atlas   = CurveAtlas::from_texels(4, 3, texels).unwrap();
        let bytes   = atlas.to_bmp_bytes();
        let loaded  = CurveAtlas::from_bmp_bytes(&bytes).unwrap();

        assert!(loaded == atlas);
        assert!(loaded.texel_size() == [0.25, 1.0/3.0]);
    }

    #[test]
    fn bitmap_needs_header() {
        assert!(CurveAtlas::from_bmp_bytes(&[0u8; 20]) == Err(AtlasError::MissingHeader));
    }
}
