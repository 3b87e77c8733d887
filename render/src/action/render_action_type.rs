use super::render_action::*;

///
/// An enumeration of the types of possible render actions without their data (useful for logging and profiling)
///
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
pub enum RenderActionType {
    SetTransform,
    CreateGlyphVertexBuffer,
    CreatePageVertexBuffer,
    FreeVertexBuffer,
    CreateCurveAtlas,
    FreeCurveAtlas,
    BlendMode,
    Clear,
    UseShader,
    DrawTriangleStrip,
    ShowFrameBuffer,
}

impl From<&RenderAction> for RenderActionType {
    fn from(render_action: &RenderAction) -> RenderActionType {
        match render_action {
            RenderAction::SetTransform(_)                   => RenderActionType::SetTransform,
            RenderAction::CreateGlyphVertexBuffer(_, _)     => RenderActionType::CreateGlyphVertexBuffer,
            RenderAction::CreatePageVertexBuffer(_, _)      => RenderActionType::CreatePageVertexBuffer,
            RenderAction::FreeVertexBuffer(_)               => RenderActionType::FreeVertexBuffer,
            RenderAction::CreateCurveAtlas(_, _)            => RenderActionType::CreateCurveAtlas,
            RenderAction::FreeCurveAtlas(_)                 => RenderActionType::FreeCurveAtlas,
            RenderAction::BlendMode(_)                      => RenderActionType::BlendMode,
            RenderAction::Clear(_)                          => RenderActionType::Clear,
            RenderAction::UseShader(_)                      => RenderActionType::UseShader,
            RenderAction::DrawTriangleStrip(_, _)           => RenderActionType::DrawTriangleStrip,
            RenderAction::ShowFrameBuffer                   => RenderActionType::ShowFrameBuffer,
        }
    }
}
