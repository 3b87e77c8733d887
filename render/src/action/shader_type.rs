use super::color::*;
use super::identities::*;

///
/// The shaders that can be chosen for the renderer
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ShaderType {
    /// Flat colour page rectangles, with vertices in world coordinates
    PageBackground { color: Rgba8 },

    /// Glyph quads, with coverage evaluated from the curves in the specified atlas. `show_grids` overlays the acceleration grid cells.
    Glyph { atlas: AtlasId, show_grids: bool },
}
