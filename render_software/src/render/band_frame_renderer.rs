use super::frame_size::*;
use super::renderer::*;
use super::render_slice::*;

use crate::pixel::*;

/// The number of rows rendered together in each band
pub const LINES_AT_ONCE: usize = 8;

///
/// Renders a whole frame by dividing it into bands of rows and passing each band to a region renderer
///
/// With the `multithreading` feature, bands are rendered in parallel.
///
pub struct BandFrameRenderer<TRegionRenderer>
where
    TRegionRenderer: Renderer<Region=RenderSlice, Dest=[F32LinearPixel]>,
{
    region_renderer: TRegionRenderer,
}

impl<TRegionRenderer> BandFrameRenderer<TRegionRenderer>
where
    TRegionRenderer: Renderer<Region=RenderSlice, Dest=[F32LinearPixel]>,
{
    ///
    /// Creates a new frame renderer
    ///
    pub fn new(region_renderer: TRegionRenderer) -> Self {
        BandFrameRenderer { region_renderer }
    }

    ///
    /// The rows covered by a band
    ///
    #[inline]
    fn band_rows(band_idx: usize, height: usize) -> std::ops::Range<usize> {
        let start_y = band_idx * LINES_AT_ONCE;
        let end_y   = (start_y + LINES_AT_ONCE).min(height);

        start_y..end_y
    }
}

#[cfg(not(feature="multithreading"))]
impl<TRegionRenderer> Renderer for BandFrameRenderer<TRegionRenderer>
where
    TRegionRenderer:            Renderer<Region=RenderSlice, Dest=[F32LinearPixel]>,
    TRegionRenderer::Source:    Sync,
{
    type Region = FrameSize;
    type Source = TRegionRenderer::Source;
    type Dest   = [F32LinearPixel];

    fn render(&self, region: &FrameSize, source: &TRegionRenderer::Source, dest: &mut [F32LinearPixel]) {
        if region.width == 0 || region.height == 0 {
            return;
        }

        let len     = region.pixel_count().min(dest.len());
        let dest    = &mut dest[0..len];
        let chunks  = dest.chunks_mut(region.width*LINES_AT_ONCE);

        for (band_idx, chunk) in chunks.enumerate() {
            let render_slice = RenderSlice {
                width:          region.width,
                frame_height:   region.height,
                rows:           Self::band_rows(band_idx, region.height),
            };

            self.region_renderer.render(&render_slice, source, chunk);
        }
    }
}

#[cfg(feature="multithreading")]
impl<TRegionRenderer> Renderer for BandFrameRenderer<TRegionRenderer>
where
    TRegionRenderer:            Renderer<Region=RenderSlice, Dest=[F32LinearPixel]> + Sync,
    TRegionRenderer::Source:    Sync,
{
    type Region = FrameSize;
    type Source = TRegionRenderer::Source;
    type Dest   = [F32LinearPixel];

    fn render(&self, region: &FrameSize, source: &TRegionRenderer::Source, dest: &mut [F32LinearPixel]) {
        use rayon::prelude::*;

        if region.width == 0 || region.height == 0 {
            return;
        }

        // Cut the destination into bands
        let len         = region.pixel_count().min(dest.len());
        let dest        = &mut dest[0..len];
        let chunks      = dest.par_chunks_mut(region.width*LINES_AT_ONCE);
        let renderer    = &self.region_renderer;

        chunks.enumerate().map(|(band_idx, chunk)| {
            (Self::band_rows(band_idx, region.height), chunk)
        }).for_each_init(|| {
                RenderSlice { width: region.width, frame_height: region.height, rows: 0..0 }
            },
            |render_slice, (rows, chunk)| {
                render_slice.rows = rows;
                renderer.render(render_slice, source, chunk);
            });
    }
}
