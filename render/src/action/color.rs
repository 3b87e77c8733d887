///
/// An 8-bit RGBA colour
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    ///
    /// The components of this colour as floating point values in the range 0..1
    ///
    #[inline]
    pub fn to_f32(&self) -> [f32; 4] {
        let Rgba8([r, g, b, a]) = *self;

        [(r as f32)/255.0, (g as f32)/255.0, (b as f32)/255.0, (a as f32)/255.0]
    }
}
