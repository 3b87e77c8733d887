use std::fmt;
use std::error::Error;

///
/// Errors that can occur while loading or building a curve atlas
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AtlasError {
    /// The atlas has a zero width or height
    EmptySurface,

    /// There were fewer texels than needed to fill a surface of the specified size (needed, found)
    NotEnoughTexels(usize, usize),

    /// The byte stream was too short to contain the bitmap header
    MissingHeader,

    /// The byte stream did not contain a whole number of RGBA texels
    PartialTexel,

    /// A glyph has more control points than can be addressed by a single index byte
    TooManyCurves(usize),

    /// An acceleration grid cell overlapped more curves than can be stored in it (cell x, cell y, count)
    TooManyCurvesInCell(usize, usize, usize),

    /// The glyph data does not fit into an atlas of the requested width
    AtlasTooNarrow(usize),

    /// A glyph was supplied with a grid resolution of 0
    EmptyGrid,
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::AtlasError::*;

        match self {
            EmptySurface                            => write!(f, "curve atlas has no texels"),
            NotEnoughTexels(needed, found)          => write!(f, "curve atlas needs {} texels but only {} were supplied", needed, found),
            MissingHeader                           => write!(f, "curve atlas data is too short to contain a header"),
            PartialTexel                            => write!(f, "curve atlas data is not a whole number of RGBA texels"),
            TooManyCurves(count)                    => write!(f, "glyph has {} control points, which is more than an index byte can address", count),
            TooManyCurvesInCell(x, y, count)        => write!(f, "grid cell ({}, {}) overlaps {} curves (at most 8 can be stored)", x, y, count),
            AtlasTooNarrow(width)                   => write!(f, "glyph data needs an atlas at least {} texels wide", width),
            EmptyGrid                               => write!(f, "glyph acceleration grid must have at least one cell"),
        }
    }
}

impl Error for AtlasError { }
