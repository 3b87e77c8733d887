///
/// A renderer fills in the pixels of a region of a frame from a set of source instructions
///
pub trait Renderer : Send + Sync {
    /// Specifies which part of the frame is being rendered
    type Region: ?Sized;

    /// The instructions that are being rendered
    type Source: ?Sized;

    /// The buffer that receives the pixels for the region
    type Dest: ?Sized;

    ///
    /// Renders the instructions for a region to a destination
    ///
    fn render(&self, region: &Self::Region, source: &Self::Source, dest: &mut Self::Dest);
}
