//!
//! # flo_glyph_software
//!
//! A software renderer for the render actions generated by `flo_glyph_render`. Triangle strips are rasterised on
//! the CPU and the pixels of glyph quads are shaded by the coverage kernel, which casts rays across each pixel
//! and finds where they cross the quadratic curves stored in the curve atlas.
//!
//! Frames are rendered in bands of rows, which are processed in parallel when the `multithreading` feature
//! is enabled. The result can be read back as RGBA bytes or written as a PNG file (feature `render_png`).
//!

/// The coverage kernel evaluates how much of a pixel is covered by a glyph
pub mod kernel;

/// Rasterises triangle strips into screen-space triangles with interpolated glyph coordinates
pub mod raster;

/// A pixel models a single colour sample, with premultiplied alpha
pub mod pixel;

mod render;

pub use self::render::*;
