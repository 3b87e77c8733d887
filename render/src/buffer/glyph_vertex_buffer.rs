use super::vertex::*;

use std::ops::{Range};
use std::sync::*;

/// Number of vertices used to describe a glyph quad
pub const VERTICES_PER_QUAD: usize = 4;

/// Number of vertices a quad occupies once expanded into a triangle strip with degenerate joins
pub const STRIP_VERTICES_PER_QUAD: usize = 6;

///
/// The decoded glyph vertices, along with the triangle strip generated from them
///
#[derive(Clone, PartialEq, Debug)]
pub struct GlyphVertexBuffer {
    /// The glyph quads, 4 vertices each
    quads: Vec<GlyphVertex>,

    /// The quads expanded into a single triangle strip (6 vertices per quad)
    strip: Arc<Vec<GlyphVertex>>,
}

impl GlyphVertexBuffer {
    ///
    /// Creates a vertex buffer from a list of quad vertices (4 per quad, any trailing partial quad is ignored)
    ///
    pub fn from_quads(quads: Vec<GlyphVertex>) -> GlyphVertexBuffer {
        let mut quads   = quads;
        let whole_quads = quads.len() - quads.len() % VERTICES_PER_QUAD;
        quads.truncate(whole_quads);

        let strip = expand_quads_to_strip(&quads);

        GlyphVertexBuffer {
            quads:  quads,
            strip:  Arc::new(strip),
        }
    }

    /// The number of glyph quads in this buffer
    #[inline] pub fn quad_count(&self) -> usize { self.quads.len() / VERTICES_PER_QUAD }

    /// The vertices of the glyph quads (4 per quad)
    #[inline] pub fn quad_vertices(&self) -> &[GlyphVertex] { &self.quads }

    /// The vertices of the expanded triangle strip (6 per quad)
    #[inline] pub fn strip_vertices(&self) -> &Arc<Vec<GlyphVertex>> { &self.strip }

    ///
    /// Returns the centre of a glyph quad in normalized page coordinates
    ///
    pub fn quad_centre(&self, quad_idx: usize) -> Option<[f32; 2]> {
        let first   = self.quads.get(quad_idx * VERTICES_PER_QUAD)?.normalized_pos();
        let last    = self.quads.get(quad_idx * VERTICES_PER_QUAD + 3)?.normalized_pos();

        Some([(first[0] + last[0]) * 0.5, (first[1] + last[1]) * 0.5])
    }
}

///
/// Expands quads of 4 vertices into a continuous triangle strip
///
/// Each quad `[a, b, c, d]` becomes `[a, a, b, c, d, d]`: the repeated vertices form zero-area triangles that
/// join the quads together.
///
pub fn expand_quads_to_strip(quads: &[GlyphVertex]) -> Vec<GlyphVertex> {
    let mut strip = Vec::with_capacity(quads.len() / VERTICES_PER_QUAD * STRIP_VERTICES_PER_QUAD);

    for quad in quads.chunks_exact(VERTICES_PER_QUAD) {
        strip.push(quad[0]);
        strip.extend_from_slice(quad);
        strip.push(quad[3]);
    }

    strip
}

///
/// Maps a range of quad vertex indices (4 per quad) to the corresponding range in the expanded strip
///
#[inline]
pub fn strip_range(begin_vertex: usize, end_vertex: usize) -> Range<usize> {
    let start   = begin_vertex / VERTICES_PER_QUAD * STRIP_VERTICES_PER_QUAD;
    let len     = (end_vertex.saturating_sub(begin_vertex)) / VERTICES_PER_QUAD * STRIP_VERTICES_PER_QUAD;

    start..(start + len)
}
