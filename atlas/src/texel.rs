///
/// A single RGBA texel from a curve atlas (8 bits per channel)
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Texel(pub [u8; 4]);

impl Texel {
    ///
    /// Creates a texel that stores two 16-bit values, the first in the red/green channels and the second in the blue/alpha channels
    ///
    #[inline]
    pub fn from_ushorts(x: u16, y: u16) -> Texel {
        let (x_hi, x_lo) = split_ushort(x);
        let (y_hi, y_lo) = split_ushort(y);

        Texel([x_hi, x_lo, y_hi, y_lo])
    }

    ///
    /// Retrieves the RGBA bytes making up this texel
    ///
    #[inline]
    pub fn components(&self) -> [u8; 4] {
        self.0
    }

    ///
    /// Reads a channel as a normalized value in the range 0..1 (the way a texture sampler would return it)
    ///
    #[inline]
    pub fn channel(&self, idx: usize) -> f32 {
        (self.0[idx] as f32) / 255.0
    }

    ///
    /// Decodes the two 16-bit values stored in this texel
    ///
    #[inline]
    pub fn ushort_pair(&self) -> [f32; 2] {
        [
            ushort_from_channels(self.channel(0), self.channel(1)),
            ushort_from_channels(self.channel(2), self.channel(3)),
        ]
    }

    ///
    /// Decodes the two 16-bit values stored in this texel, mapped to the range 0..1
    ///
    #[inline]
    pub fn normalized_pair(&self) -> [f32; 2] {
        [
            normalized_ushort_from_channels(self.channel(0), self.channel(1)),
            normalized_ushort_from_channels(self.channel(2), self.channel(3)),
        ]
    }
}

///
/// Splits a 16-bit value into its most significant and least significant bytes
///
#[inline]
pub fn split_ushort(value: u16) -> (u8, u8) {
    ((value >> 8) as u8, (value & 0xff) as u8)
}

///
/// Recovers a value in the range 0-65535 from two normalized channel samples
///
/// `hi` holds the most significant byte and `lo` the least significant one, each as `byte/255`. The
/// result is rounded so that the sampled floating point values decode to the exact integer.
///
#[inline]
pub fn ushort_from_channels(hi: f32, lo: f32) -> f32 {
    (65280.0 * hi + 255.0 * lo).round()
}

///
/// As for `ushort_from_channels` but mapped into the range 0..1
///
#[inline]
pub fn normalized_ushort_from_channels(hi: f32, lo: f32) -> f32 {
    ushort_from_channels(hi, lo) / 65535.0
}

///
/// Splits an atlas coordinate containing a flag in its lowest bit into the coordinate and the flag
///
/// Returns `(floor(raw/2), raw mod 2)`
///
#[inline]
pub fn decode_with_flag(raw: u16) -> (u16, u16) {
    (raw >> 1, raw & 1)
}

///
/// Packs a coordinate and a 1-bit flag into a single 16-bit value
///
/// The coordinate must fit in 15 bits
///
#[inline]
pub fn encode_with_flag(coord: u16, flag: bool) -> u16 {
    (coord << 1) | (flag as u16)
}
