use std::fmt;
use std::error::Error;

///
/// Errors that can occur when loading the list of pages
///
#[derive(Debug)]
pub enum PageError {
    /// The page list could not be parsed
    Parse(serde_json::Error),

    /// There are no pages in the list (the first page is needed to work out the layout)
    NoPages,

    /// A page has a zero width or height (page index)
    EmptyPage(usize),

    /// A page's vertex range does not start and end on glyph quad boundaries (page index)
    UnalignedRange(usize),

    /// A page's vertex range extends beyond the end of the vertex buffer (page index, number of vertices)
    RangeOutOfBounds(usize, usize),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PageError::Parse(err)                       => write!(f, "could not parse page list: {}", err),
            PageError::NoPages                          => write!(f, "page list is empty"),
            PageError::EmptyPage(idx)                   => write!(f, "page {} has no area", idx),
            PageError::UnalignedRange(idx)              => write!(f, "vertex range for page {} does not cover whole glyphs", idx),
            PageError::RangeOutOfBounds(idx, count)     => write!(f, "vertex range for page {} is outside of the {} loaded vertices", idx, count),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PageError::Parse(err)   => Some(err),
            _                       => None,
        }
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> PageError {
        PageError::Parse(err)
    }
}
