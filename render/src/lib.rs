//!
//! # flo_glyph_render
//!
//! Turns pages of glyphs into a stream of render actions. Glyphs are quads whose coverage is evaluated per pixel
//! from the quadratic curves stored in a curve atlas (see `flo_curve_atlas`), so they stay sharp at any zoom.
//!
//! The vertex stream decoder loads the glyph quads, the page layout arranges the pages in a grid and the
//! `PageCompositor` generates the `RenderAction`s for each frame as the view pans and zooms. The actions are
//! consumed by a renderer such as the one in `flo_glyph_software`.
//!

#[macro_use] extern crate serde_derive;

mod action;
mod buffer;
mod decode;
mod page;
mod transform;
mod settings;
mod compositor;

#[cfg(feature="profile")]
mod profiler;

pub use self::action::*;
pub use self::buffer::*;
pub use self::decode::*;
pub use self::page::*;
pub use self::transform::*;
pub use self::settings::*;
pub use self::compositor::*;

#[cfg(feature="profile")]
pub use self::profiler::*;
