//!
//! # Curve atlases
//!
//! A curve atlas is a 2D surface of RGBA texels that stores the outlines of a set of glyphs as quadratic bezier
//! curves, along with an acceleration grid for each glyph that lists which curves are near each part of it.
//! Renderers sample the atlas per-pixel to work out exactly how much of that pixel a glyph covers.
//!
//! Each glyph has an origin texel: this stores the location of its acceleration grid, the next texel stores the
//! grid resolution, and the control points follow on the same row. 16-bit values are stored in pairs of 8-bit
//! channels, most significant byte first.
//!

mod texel;
mod error;
mod surface;
mod curve;
mod glyph;
mod grid;
mod builder;

pub use self::texel::*;
pub use self::error::*;
pub use self::surface::*;
pub use self::curve::*;
pub use self::glyph::*;
pub use self::grid::*;
pub use self::builder::*;
