use super::color::*;
use super::identities::*;
use super::blend_mode::*;
use super::shader_type::*;
use super::position_transform::*;

use crate::buffer::*;

use flo_curve_atlas::*;

use std::ops::{Range};
use std::sync::*;

///
/// Represents an action for a render target
///
#[derive(Clone, PartialEq, Debug)]
pub enum RenderAction {
    ///
    /// Sets the position multiply-add pair to use for future renderings
    ///
    SetTransform(PositionTransform),

    ///
    /// Creates a vertex buffer containing glyph vertices (replacing any existing buffer)
    ///
    CreateGlyphVertexBuffer(VertexBufferId, Arc<Vec<GlyphVertex>>),

    ///
    /// Creates a vertex buffer containing page background vertices (replacing any existing buffer)
    ///
    CreatePageVertexBuffer(VertexBufferId, Vec<PageVertex>),

    ///
    /// Frees an existing vertex buffer
    ///
    FreeVertexBuffer(VertexBufferId),

    ///
    /// Makes a curve atlas available to the glyph shader (replacing any existing atlas with the same ID)
    ///
    CreateCurveAtlas(AtlasId, CurveAtlas),

    ///
    /// Frees an existing curve atlas
    ///
    FreeCurveAtlas(AtlasId),

    ///
    /// Sets the blend mode for future drawing operations (SourceOver is the default)
    ///
    BlendMode(BlendMode),

    ///
    /// Clears the current render target to the specified colour
    ///
    Clear(Rgba8),

    ///
    /// Uses the specified shader
    ///
    UseShader(ShaderType),

    ///
    /// Renders a triangle strip from a range of vertices in a vertex buffer
    ///
    DrawTriangleStrip(VertexBufferId, Range<usize>),

    ///
    /// Display the current frame buffer
    ///
    ShowFrameBuffer,
}
