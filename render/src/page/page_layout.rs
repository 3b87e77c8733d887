use super::page_error::*;
use super::page_descriptor::*;

use crate::buffer::*;

use std::ops::{Range};

/// Default spacing between pages, as a multiple of the page size
pub const DEFAULT_PAGE_GAP: f32 = 1.02;

///
/// A page that has been positioned in the document grid
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Page {
    /// The page as it was described in the page list
    pub descriptor: PageDescriptor,

    /// The column in the layout grid
    pub column: usize,

    /// The row in the layout grid
    pub row: usize,

    /// Translation that's applied to the page's glyphs: world coordinates are `(pos.x, 1-pos.y) - offset`
    pub offset: [f32; 2],

    /// Size of the page relative to the first page
    pub size: [f32; 2],
}

impl Page {
    ///
    /// The rectangle this page occupies in world coordinates, as (min, max)
    ///
    pub fn world_bounds(&self) -> ([f32; 2], [f32; 2]) {
        let x0 = -self.offset[0];
        let y0 = -self.offset[1];

        ([x0, y0], [x0 + self.size[0], y0 + self.size[1]])
    }

    ///
    /// The range of the expanded triangle strip that contains this page's glyphs
    ///
    #[inline]
    pub fn strip_range(&self) -> Range<usize> {
        strip_range(self.descriptor.begin_vertex, self.descriptor.end_vertex)
    }

    ///
    /// The number of glyphs on this page
    ///
    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.descriptor.end_vertex.saturating_sub(self.descriptor.begin_vertex) / VERTICES_PER_QUAD
    }
}

///
/// The pages of a document laid out in a grid
///
#[derive(Clone, PartialEq, Debug)]
pub struct PageLayout {
    pages:      Vec<Page>,
    columns:    usize,
}

impl PageLayout {
    ///
    /// Lays out a list of pages for a canvas of a particular size
    ///
    /// The number of columns is chosen so the grid of pages roughly matches the aspect ratio of the canvas,
    /// based on the size of the first page.
    ///
    pub fn new(descriptors: Vec<PageDescriptor>, canvas_size: (f32, f32), gap: f32) -> Result<PageLayout, PageError> {
        let first = descriptors.get(0).ok_or(PageError::NoPages)?;

        for (idx, page) in descriptors.iter().enumerate() {
            if !(page.width > 0.0 && page.height > 0.0) {
                return Err(PageError::EmptyPage(idx));
            }
        }

        let (canvas_width, canvas_height) = canvas_size;
        let num_pages   = descriptors.len() as f32;
        let columns     = (num_pages / canvas_height * canvas_width / first.width * first.height).sqrt().floor();
        let columns     = if columns.is_finite() && columns >= 1.0 { columns as usize } else { 1 };

        let (first_width, first_height) = (first.width, first.height);
        let pages = descriptors.into_iter()
            .enumerate()
            .map(|(idx, descriptor)| {
                let column  = idx % columns;
                let row     = idx / columns;

                Page {
                    descriptor: descriptor,
                    column:     column,
                    row:        row,
                    offset:     [-(column as f32) * gap, (row as f32) * gap],
                    size:       [descriptor.width / first_width, descriptor.height / first_height],
                }
            })
            .collect::<Vec<_>>();

        log::info!("Loaded {} page(s) in {} column(s)", pages.len(), columns);

        Ok(PageLayout { pages, columns })
    }

    ///
    /// Parses a JSON page list and lays out the pages
    ///
    pub fn from_json(json: &str, canvas_size: (f32, f32), gap: f32) -> Result<PageLayout, PageError> {
        let descriptors = PageDescriptor::list_from_json(json)?;

        Self::new(descriptors, canvas_size, gap)
    }

    ///
    /// Checks that every page's vertex range covers whole glyphs within a buffer of the specified number of quad vertices
    ///
    pub fn check_ranges(&self, num_vertices: usize) -> Result<(), PageError> {
        for (idx, page) in self.pages.iter().enumerate() {
            let PageDescriptor { begin_vertex, end_vertex, .. } = page.descriptor;

            if begin_vertex % VERTICES_PER_QUAD != 0 || end_vertex % VERTICES_PER_QUAD != 0 || end_vertex < begin_vertex {
                return Err(PageError::UnalignedRange(idx));
            }

            if end_vertex > num_vertices {
                return Err(PageError::RangeOutOfBounds(idx, num_vertices));
            }
        }

        Ok(())
    }

    /// The pages in this layout
    #[inline] pub fn pages(&self) -> &[Page] { &self.pages }

    /// The number of columns in the layout grid
    #[inline] pub fn columns(&self) -> usize { self.columns }

    ///
    /// The aspect ratio (width / height) of the first page, which all page coordinates are relative to
    ///
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        let first = &self.pages[0].descriptor;
        first.width / first.height
    }

    ///
    /// Generates the triangle strip that draws the page backgrounds (6 vertices per page, in world coordinates)
    ///
    pub fn background_vertices(&self) -> Vec<PageVertex> {
        let mut vertices = Vec::with_capacity(self.pages.len() * STRIP_VERTICES_PER_QUAD);

        for page in self.pages.iter() {
            let ([x0, y0], [x1, y1]) = page.world_bounds();

            vertices.extend([
                PageVertex::with_pos(x0, y0),
                PageVertex::with_pos(x0, y0),
                PageVertex::with_pos(x1, y0),
                PageVertex::with_pos(x0, y1),
                PageVertex::with_pos(x1, y1),
                PageVertex::with_pos(x1, y1),
            ].iter().copied());
        }

        vertices
    }

    ///
    /// Finds the world coordinates of the centre of a glyph on a page
    ///
    pub fn glyph_centre(&self, page_idx: usize, glyph_idx: usize, glyphs: &GlyphVertexBuffer) -> Option<[f32; 2]> {
        let page        = self.pages.get(page_idx)?;
        if glyph_idx >= page.glyph_count() { return None; }

        let quad_idx    = page.descriptor.begin_vertex / VERTICES_PER_QUAD + glyph_idx;
        let [x, y]      = glyphs.quad_centre(quad_idx)?;

        Some([x - page.offset[0], 1.0 - y - page.offset[1]])
    }
}
