use std::fmt;
use std::error::Error;

///
/// Reasons a vertex stream can be rejected when it's loaded
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer is too short to contain the header that precedes the vertex data
    MissingHeader,

    /// The length of the vertex data (in bytes) is not a multiple of the size of a vertex record
    UnsupportedInputLength(usize),

    /// The number of vertices is not a multiple of 4, so the last glyph quad is incomplete
    IncompleteQuad(usize),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::MissingHeader                  => write!(f, "vertex stream is too short to contain a header"),
            DecodeError::UnsupportedInputLength(len)    => write!(f, "vertex stream payload of {} bytes is not a whole number of vertex records", len),
            DecodeError::IncompleteQuad(count)          => write!(f, "vertex stream contains {} vertices, which is not a whole number of glyph quads", count),
        }
    }
}

impl Error for DecodeError { }
