use flo_curve_atlas::*;

/// Size in bytes of a single glyph vertex record
pub const GLYPH_VERTEX_SIZE: usize = 12;

///
/// A corner of a glyph quad
///
/// Positions are normalized 16-bit values (0..65535 maps to 0..1 across the page). The atlas coordinate is
/// the glyph's curve origin, with the lowest bit of each axis used to flag which corner of the glyph box this
/// vertex is.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(C)]
pub struct GlyphVertex {
    pub pos:        [u16; 2],
    pub curves_min: [u16; 2],
    pub color:      [u8; 4]
}

impl GlyphVertex {
    ///
    /// Creates a glyph vertex at a normalized page position, with the atlas coordinate and colour zeroed out
    ///
    pub fn with_pos(x: f32, y: f32) -> GlyphVertex {
        let quantize = |v: f32| (v.max(0.0).min(1.0) * 65535.0).round() as u16;

        GlyphVertex {
            pos:        [quantize(x), quantize(y)],
            curves_min: [0, 0],
            color:      [0, 0, 0, 0]
        }
    }

    ///
    /// Updates this vertex with a particular colour
    ///
    pub fn with_color(self, r: f32, g: f32, b: f32, a: f32) -> GlyphVertex {
        GlyphVertex {
            pos:        self.pos,
            curves_min: self.curves_min,
            color:      [(r*255.0) as _, (g*255.0) as _, (b*255.0) as _, (a*255.0) as _]
        }
    }

    ///
    /// Updates this vertex to refer to a corner of the glyph at the specified curve origin
    ///
    pub fn with_glyph_corner(self, origin: CurveOrigin, corner_x: bool, corner_y: bool) -> GlyphVertex {
        GlyphVertex {
            pos:        self.pos,
            curves_min: origin.to_vertex_field(corner_x, corner_y),
            color:      self.color
        }
    }

    ///
    /// The position of this vertex in the range 0..1
    ///
    #[inline]
    pub fn normalized_pos(&self) -> [f32; 2] {
        [(self.pos[0] as f32) / 65535.0, (self.pos[1] as f32) / 65535.0]
    }

    ///
    /// The curve origin and corner flag for this vertex
    ///
    #[inline]
    pub fn glyph_corner(&self) -> (CurveOrigin, [u16; 2]) {
        CurveOrigin::from_vertex_field(self.curves_min)
    }

    ///
    /// Reads a vertex from its 12-byte little-endian record
    ///
    pub fn from_bytes(bytes: &[u8; GLYPH_VERTEX_SIZE]) -> GlyphVertex {
        let word = |idx: usize| u16::from_le_bytes([bytes[idx*2], bytes[idx*2+1]]);

        GlyphVertex {
            pos:        [word(0), word(1)],
            curves_min: [word(2), word(3)],
            color:      [bytes[8], bytes[9], bytes[10], bytes[11]]
        }
    }

    ///
    /// Writes this vertex as a 12-byte little-endian record
    ///
    pub fn to_bytes(&self) -> [u8; GLYPH_VERTEX_SIZE] {
        let mut bytes = [0u8; GLYPH_VERTEX_SIZE];

        bytes[0..2].copy_from_slice(&self.pos[0].to_le_bytes());
        bytes[2..4].copy_from_slice(&self.pos[1].to_le_bytes());
        bytes[4..6].copy_from_slice(&self.curves_min[0].to_le_bytes());
        bytes[6..8].copy_from_slice(&self.curves_min[1].to_le_bytes());
        bytes[8..12].copy_from_slice(&self.color);

        bytes
    }

    ///
    /// The vertex as the six 16-bit words that make up its record
    ///
    pub fn to_words(&self) -> [u16; 6] {
        [
            self.pos[0],
            self.pos[1],
            self.curves_min[0],
            self.curves_min[1],
            u16::from_le_bytes([self.color[0], self.color[1]]),
            u16::from_le_bytes([self.color[2], self.color[3]]),
        ]
    }

    ///
    /// Creates a vertex from the six 16-bit words that make up its record
    ///
    pub fn from_words(words: [u16; 6]) -> GlyphVertex {
        let [r, g] = words[4].to_le_bytes();
        let [b, a] = words[5].to_le_bytes();

        GlyphVertex {
            pos:        [words[0], words[1]],
            curves_min: [words[2], words[3]],
            color:      [r, g, b, a]
        }
    }
}

///
/// A vertex of a page background rectangle, in world coordinates
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct PageVertex {
    pub pos: [f32; 2],
}

impl PageVertex {
    ///
    /// Creates a page vertex at the specified position
    ///
    #[inline]
    pub fn with_pos(x: f32, y: f32) -> PageVertex {
        PageVertex { pos: [x, y] }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn byte_record_round_trip() {
        let vertex = GlyphVertex { pos: [1, 65535], curves_min: [0x1234, 0x8001], color: [10, 20, 30, 40] };

        assert!(GlyphVertex::from_bytes(&vertex.to_bytes()) == vertex);
        assert!(GlyphVertex::from_words(vertex.to_words()) == vertex);
    }

    #[test]
    fn glyph_corner_flags() {
        let origin = CurveOrigin { x: 100, y: 7 };
        let vertex = GlyphVertex::with_pos(0.5, 0.5).with_glyph_corner(origin, true, false);

        assert!(vertex.glyph_corner() == (origin, [1, 0]));
    }
}
