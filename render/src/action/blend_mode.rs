///
/// How newly drawn fragments are combined with the existing contents of the frame
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BlendMode {
    /// Fragments replace the existing pixels (blending disabled)
    Opaque,

    /// Standard alpha blending: `src * src_alpha + dst * (1 - src_alpha)`
    SourceOver,
}
