use super::decode_error::*;

use crate::buffer::*;

/// Size of the opaque header that precedes the vertex data in a vertex stream
pub const VERTEX_STREAM_HEADER_SIZE: usize = 54;

/// Number of 16-bit words in each vertex record
const WORDS_PER_VERTEX: usize = GLYPH_VERTEX_SIZE / 2;

///
/// Decodes a vertex stream into a glyph vertex buffer
///
/// The stream is a fixed-size header followed by the vertex records stored 'axis-major': every vertex's
/// x position, then every y position, then the two atlas coordinate words and the two colour words. The
/// position words are delta-coded against the previous vertex.
///
pub fn decode_vertex_stream(bytes: &[u8]) -> Result<GlyphVertexBuffer, DecodeError> {
    if bytes.len() < VERTEX_STREAM_HEADER_SIZE {
        return Err(DecodeError::MissingHeader);
    }

    let vertices = decode_vertex_payload(&bytes[VERTEX_STREAM_HEADER_SIZE..])?;
    log::info!("Loaded {} glyphs", vertices.len() / VERTICES_PER_QUAD);

    Ok(GlyphVertexBuffer::from_quads(vertices))
}

///
/// Decodes the payload of a vertex stream (everything after the header) into quad vertices
///
pub fn decode_vertex_payload(payload: &[u8]) -> Result<Vec<GlyphVertex>, DecodeError> {
    if payload.len() % GLYPH_VERTEX_SIZE != 0 {
        return Err(DecodeError::UnsupportedInputLength(payload.len()));
    }

    let num_vertices = payload.len() / GLYPH_VERTEX_SIZE;
    if num_vertices % VERTICES_PER_QUAD != 0 {
        return Err(DecodeError::IncompleteQuad(num_vertices));
    }

    let mut words = payload.chunks_exact(2)
        .map(|word| u16::from_le_bytes([word[0], word[1]]))
        .collect::<Vec<_>>();

    // Undo the delta coding on the two position planes
    prefix_sum(&mut words[0..num_vertices]);
    prefix_sum(&mut words[num_vertices..(2*num_vertices)]);

    // Transpose back to one record per vertex
    let vertices = (0..num_vertices)
        .map(|vertex_idx| {
            let mut record = [0u16; WORDS_PER_VERTEX];
            for (plane, word) in record.iter_mut().enumerate() {
                *word = words[plane*num_vertices + vertex_idx];
            }

            GlyphVertex::from_words(record)
        })
        .collect();

    Ok(vertices)
}

///
/// Encodes quad vertices as a vertex stream (the inverse of `decode_vertex_stream`)
///
pub fn encode_vertex_stream(vertices: &[GlyphVertex]) -> Vec<u8> {
    let num_vertices    = vertices.len();
    let mut words       = vec![0u16; num_vertices * WORDS_PER_VERTEX];

    for (vertex_idx, vertex) in vertices.iter().enumerate() {
        for (plane, word) in vertex.to_words().iter().enumerate() {
            words[plane*num_vertices + vertex_idx] = *word;
        }
    }

    delta_encode(&mut words[0..num_vertices]);
    delta_encode(&mut words[num_vertices..(2*num_vertices)]);

    let mut bytes = vec![0u8; VERTEX_STREAM_HEADER_SIZE];
    bytes[0] = b'B';
    bytes[1] = b'M';
    bytes.extend(words.iter().flat_map(|word| word.to_le_bytes()));

    bytes
}

///
/// Replaces each value with the (wrapping) sum of itself and every value before it
///
#[inline]
fn prefix_sum(values: &mut [u16]) {
    for idx in 1..values.len() {
        values[idx] = values[idx].wrapping_add(values[idx-1]);
    }
}

///
/// Replaces each value (apart from the first) with its (wrapping) difference from the value before it
///
#[inline]
fn delta_encode(values: &mut [u16]) {
    for idx in (1..values.len()).rev() {
        values[idx] = values[idx].wrapping_sub(values[idx-1]);
    }
}
