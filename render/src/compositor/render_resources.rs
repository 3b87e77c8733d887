use super::resource_error::*;

use crate::buffer::*;
use crate::decode::*;
use crate::page::*;

use flo_curve_atlas::*;

///
/// The resources that need to be loaded before a document can be drawn
///
/// These are loaded independently (and possibly in any order): no frames are drawn until all three are
/// available.
///
#[derive(Clone, Debug, Default)]
pub struct RenderResources {
    atlas:  Option<CurveAtlas>,
    glyphs: Option<GlyphVertexBuffer>,
    pages:  Option<PageLayout>,
}

impl RenderResources {
    ///
    /// Creates an empty set of resources
    ///
    pub fn new() -> RenderResources {
        RenderResources::default()
    }

    ///
    /// Sets the curve atlas
    ///
    pub fn set_atlas(&mut self, atlas: CurveAtlas) {
        log::info!("Curve atlas is {}x{} texels", atlas.width(), atlas.height());

        self.atlas = Some(atlas);
    }

    ///
    /// Sets the glyph vertices, checking that they cover the vertex ranges of any pages that are already loaded
    ///
    pub fn set_glyphs(&mut self, glyphs: GlyphVertexBuffer) -> Result<(), PageError> {
        if let Some(pages) = &self.pages {
            pages.check_ranges(glyphs.quad_vertices().len())?;
        }

        self.glyphs = Some(glyphs);
        Ok(())
    }

    ///
    /// Sets the page layout, checking its vertex ranges against any glyphs that are already loaded
    ///
    pub fn set_pages(&mut self, pages: PageLayout) -> Result<(), PageError> {
        if let Some(glyphs) = &self.glyphs {
            pages.check_ranges(glyphs.quad_vertices().len())?;
        }

        self.pages = Some(pages);
        Ok(())
    }

    ///
    /// Loads the curve atlas from a bitmap-framed surface
    ///
    pub fn load_atlas(&mut self, bytes: &[u8]) -> Result<(), ResourceError> {
        let atlas = CurveAtlas::from_bmp_bytes(bytes)?;
        self.set_atlas(atlas);

        Ok(())
    }

    ///
    /// Loads the glyph vertices from a vertex stream
    ///
    /// The glyphs are left unloaded if the stream fails to decode or doesn't cover the vertex ranges of the
    /// page list.
    ///
    pub fn load_glyphs(&mut self, bytes: &[u8]) -> Result<(), ResourceError> {
        let glyphs = decode_vertex_stream(bytes)?;

        if let Err(err) = self.set_glyphs(glyphs) {
            log::warn!("Glyph vertices do not match the page list: {}", err);
            return Err(err.into());
        }

        Ok(())
    }

    ///
    /// Loads the page layout from a JSON page list
    ///
    pub fn load_pages(&mut self, json: &str, canvas_size: (f32, f32), gap: f32) -> Result<(), PageError> {
        let layout = PageLayout::from_json(json, canvas_size, gap)?;
        self.set_pages(layout)
    }

    /// The curve atlas, if it has been loaded
    #[inline] pub fn atlas(&self) -> Option<&CurveAtlas> { self.atlas.as_ref() }

    /// The glyph vertices, if they have been loaded
    #[inline] pub fn glyphs(&self) -> Option<&GlyphVertexBuffer> { self.glyphs.as_ref() }

    /// The page layout, if it has been loaded
    #[inline] pub fn pages(&self) -> Option<&PageLayout> { self.pages.as_ref() }

    ///
    /// True if every resource needed to draw a frame is available
    ///
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.atlas.is_some() && self.glyphs.is_some() && self.pages.is_some()
    }

    ///
    /// Returns all three resources, or None if any of them is still missing
    ///
    #[inline]
    pub fn ready(&self) -> Option<(&CurveAtlas, &GlyphVertexBuffer, &PageLayout)> {
        Some((self.atlas.as_ref()?, self.glyphs.as_ref()?, self.pages.as_ref()?))
    }
}
