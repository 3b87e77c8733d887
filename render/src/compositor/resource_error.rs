use crate::decode::*;
use crate::page::*;

use flo_curve_atlas::*;

use std::fmt;
use std::error::Error;

///
/// Errors that can occur while loading the resources for a document
///
#[derive(Debug)]
pub enum ResourceError {
    /// The curve atlas could not be loaded
    Atlas(AtlasError),

    /// The vertex stream could not be decoded
    Decode(DecodeError),

    /// The glyph vertices and the page list do not agree
    Page(PageError),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResourceError::Atlas(err)   => write!(f, "{}", err),
            ResourceError::Decode(err)  => write!(f, "{}", err),
            ResourceError::Page(err)    => write!(f, "{}", err),
        }
    }
}

impl Error for ResourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResourceError::Atlas(err)   => Some(err),
            ResourceError::Decode(err)  => Some(err),
            ResourceError::Page(err)    => Some(err),
        }
    }
}

impl From<AtlasError> for ResourceError {
    fn from(err: AtlasError) -> ResourceError { ResourceError::Atlas(err) }
}

impl From<DecodeError> for ResourceError {
    fn from(err: DecodeError) -> ResourceError { ResourceError::Decode(err) }
}

impl From<PageError> for ResourceError {
    fn from(err: PageError) -> ResourceError { ResourceError::Page(err) }
}
