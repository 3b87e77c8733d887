///
/// Identifier for a vertex buffer
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct VertexBufferId(pub usize);

///
/// Identifier for a curve atlas surface
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct AtlasId(pub usize);
