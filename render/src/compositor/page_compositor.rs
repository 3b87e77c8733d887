use super::render_resources::*;

use crate::action::*;
use crate::buffer::*;
use crate::page::*;
use crate::settings::*;
use crate::transform::*;

/// The vertex buffer that holds the glyph strip
pub const GLYPH_VERTEX_BUFFER: VertexBufferId = VertexBufferId(0);

/// The vertex buffer that holds the page background strip
pub const PAGE_VERTEX_BUFFER: VertexBufferId = VertexBufferId(1);

/// The curve atlas used by the glyph shader
pub const CURVE_ATLAS: AtlasId = AtlasId(0);

/// Time between auto-pan targets, in milliseconds
pub const AUTO_PAN_INTERVAL: f64 = 8000.0;

///
/// State of the automatic pan and zoom around the document
///
#[derive(Clone, Copy, PartialEq, Debug)]
struct AutoPan {
    /// When the current target was chosen
    last_change: Option<f64>,

    /// The number of targets that have been chosen so far
    count: usize,
}

///
/// A view onto the NDC rectangle that a page occupies
///
#[derive(Clone, Copy, PartialEq, Debug)]
struct NdcBox {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl NdcBox {
    ///
    /// True if this box overlaps the viewport (the square -1..1)
    ///
    #[inline]
    fn overlaps_viewport(&self) -> bool {
        let (x0, x1) = if self.x0 <= self.x1 { (self.x0, self.x1) } else { (self.x1, self.x0) };
        let (y0, y1) = if self.y0 <= self.y1 { (self.y0, self.y1) } else { (self.y1, self.y0) };

        x0 <= 1.0 && x1 >= -1.0 && y0 <= 1.0 && y1 >= -1.0
    }
}

///
/// Turns the loaded resources and the current view into the render actions for each frame
///
pub struct PageCompositor {
    /// The resources that are drawn
    resources: RenderResources,

    /// Settings for the renderer
    settings: RenderSettings,

    /// The view onto the pages
    transform: AnimatedTransform,

    /// True once the upload actions for the resources have been generated
    uploaded: bool,

    /// True if the next frame should be drawn even if the view hasn't changed
    render_required: bool,

    /// Set while the view is moving around the document automatically
    auto_pan: Option<AutoPan>,
}

impl PageCompositor {
    ///
    /// Creates a new compositor with no resources loaded
    ///
    pub fn new(settings: RenderSettings) -> PageCompositor {
        PageCompositor {
            resources:          RenderResources::new(),
            settings:           settings,
            transform:          AnimatedTransform::default(),
            uploaded:           false,
            render_required:    true,
            auto_pan:           None,
        }
    }

    /// The resources that this compositor will draw
    #[inline] pub fn resources(&self) -> &RenderResources { &self.resources }

    /// The settings for this compositor
    #[inline] pub fn settings(&self) -> &RenderSettings { &self.settings }

    /// The view transform
    #[inline] pub fn transform(&self) -> &AnimatedTransform { &self.transform }

    ///
    /// Updates the view transform (the next frame will reflect the new target)
    ///
    pub fn transform_mut(&mut self) -> &mut AnimatedTransform {
        &mut self.transform
    }

    ///
    /// Changes the resources for this compositor (they will be uploaded again)
    ///
    pub fn resources_mut(&mut self) -> &mut RenderResources {
        self.uploaded           = false;
        self.render_required    = true;

        &mut self.resources
    }

    ///
    /// Loads the page list, using the canvas size from the settings to lay out the pages
    ///
    pub fn load_pages(&mut self, json: &str) -> Result<(), PageError> {
        let canvas_size = self.settings.canvas_size_f32();
        let gap         = self.settings.page_gap;

        self.resources_mut().load_pages(json, canvas_size, gap)
    }

    ///
    /// Changes the size of the canvas that the frames are drawn on
    ///
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.settings.canvas_size   = (width, height);
        self.render_required        = true;
    }

    ///
    /// Turns the acceleration grid overlay on or off
    ///
    pub fn set_show_grids(&mut self, show_grids: bool) {
        self.settings.show_grids    = show_grids;
        self.render_required        = true;
    }

    ///
    /// Starts or stops moving around the document automatically
    ///
    pub fn set_auto_pan(&mut self, auto_pan: bool) {
        self.auto_pan = if auto_pan { Some(AutoPan { last_change: None, count: 0 }) } else { None };
    }

    ///
    /// Forces the next frame to be drawn
    ///
    pub fn force_render(&mut self) {
        self.render_required = true;
    }

    ///
    /// Moves the view to its target immediately and forces a new frame
    ///
    pub fn finish_animations(&mut self) {
        self.transform.finish();
        self.force_render();
    }

    ///
    /// Generates the actions that send the resources to the renderer
    ///
    /// These are generated once, the first time this is called after all of the resources are available. Returns
    /// an empty list at other times.
    ///
    pub fn upload_actions(&mut self) -> Vec<RenderAction> {
        if self.uploaded { return vec![]; }

        let (atlas, glyphs, pages) = match self.resources.ready() {
            Some(resources) => resources,
            None            => { return vec![]; }
        };

        log::debug!("Uploading {} strip vertices and {} page rectangles", glyphs.strip_vertices().len(), pages.pages().len());

        let actions = vec![
            RenderAction::CreateCurveAtlas(CURVE_ATLAS, atlas.clone()),
            RenderAction::CreateGlyphVertexBuffer(GLYPH_VERTEX_BUFFER, glyphs.strip_vertices().clone()),
            RenderAction::CreatePageVertexBuffer(PAGE_VERTEX_BUFFER, pages.background_vertices()),
        ];

        self.uploaded = true;
        actions
    }

    ///
    /// Advances the view to the specified time (in milliseconds) and returns the actions for the frame
    ///
    /// Returns None if nothing has changed since the last frame or if the resources are not all loaded yet.
    ///
    pub fn step_frame(&mut self, timestamp: f64) -> Option<Vec<RenderAction>> {
        if !self.resources.is_ready() {
            log::trace!("Skipping frame at {}ms: resources are not loaded", timestamp);
            return None;
        }

        self.update_auto_pan(timestamp);

        let changed = self.transform.update(timestamp, self.settings.animation_duration);
        if !changed && !self.render_required {
            return None;
        }

        let mut actions = self.upload_actions();
        actions.extend(self.frame_actions()?);
        actions.push(RenderAction::ShowFrameBuffer);

        self.render_required = false;
        Some(actions)
    }

    ///
    /// Generates the actions to draw the pages with the current view transform
    ///
    pub fn frame_actions(&self) -> Option<Vec<RenderAction>> {
        let (_atlas, glyphs, layout)    = self.resources.ready()?;
        let view                        = self.transform.current();
        let (zoom_x, zoom_y)            = view.zoom_scale(layout.aspect_ratio() as f64);

        let world_transform = PositionTransform {
            mul: [(1.0/zoom_x) as f32, (1.0/zoom_y) as f32],
            add: [(-view.x/zoom_x) as f32, (-view.y/zoom_y) as f32],
        };

        let num_pages   = layout.pages().len();
        let mut actions = vec![
            RenderAction::Clear(self.settings.background_color),

            RenderAction::BlendMode(BlendMode::Opaque),
            RenderAction::UseShader(ShaderType::PageBackground { color: self.settings.page_color }),
            RenderAction::SetTransform(world_transform),
            RenderAction::DrawTriangleStrip(PAGE_VERTEX_BUFFER, 0..(num_pages * STRIP_VERTICES_PER_QUAD)),

            RenderAction::BlendMode(BlendMode::SourceOver),
            RenderAction::UseShader(ShaderType::Glyph { atlas: CURVE_ATLAS, show_grids: self.settings.show_grids }),
        ];

        let strip_len = glyphs.strip_vertices().len();
        for (page_idx, page) in layout.pages().iter().enumerate() {
            let page_transform = match self.page_transform(page) {
                Some(page_transform)    => page_transform,
                None                    => { log::trace!("Page {} is outside the viewport", page_idx); continue; }
            };

            let range = page.strip_range();
            if range.start >= range.end || range.end > strip_len {
                continue;
            }

            actions.push(RenderAction::SetTransform(page_transform));
            actions.push(RenderAction::DrawTriangleStrip(GLYPH_VERTEX_BUFFER, range));
        }

        log::debug!("Frame at ({:.4}, {:.4}) zoom {:.3}: {} actions", view.x, view.y, view.zoom, actions.len());

        Some(actions)
    }

    ///
    /// The indexes of the pages that are visible with the current view transform
    ///
    pub fn visible_pages(&self) -> Vec<usize> {
        let layout = match self.resources.pages() { Some(layout) => layout, None => return vec![] };

        layout.pages().iter()
            .enumerate()
            .filter(|(_, page)| self.page_transform(page).is_some())
            .map(|(page_idx, _)| page_idx)
            .collect()
    }

    ///
    /// Works out the transform that maps the glyphs of a page to the viewport, or None if the page is not visible
    ///
    fn page_transform(&self, page: &Page) -> Option<PositionTransform> {
        let layout                  = self.resources.pages()?;
        let view                    = self.transform.current();
        let (zoom_x, zoom_y)        = view.zoom_scale(layout.aspect_ratio() as f64);
        let (canvas_w, canvas_h)    = self.settings.canvas_size;
        let canvas_ratio            = (canvas_h.max(1) as f64) / (canvas_w.max(1) as f64);

        let translate_x = page.offset[0] as f64 + view.x;
        let translate_y = page.offset[1] as f64 + view.y;

        let ndc = NdcBox {
            x0: (0.0 - translate_x) / zoom_x * canvas_ratio,
            x1: (1.0 - translate_x) / zoom_x * canvas_ratio,
            y0: (0.0 - translate_y) / zoom_y,
            y1: (1.0 - translate_y) / zoom_y,
        };

        if !ndc.overlaps_viewport() {
            return None;
        }

        Some(PositionTransform {
            mul: [(1.0/zoom_x) as f32, (1.0/zoom_y) as f32],
            add: [(-translate_x/zoom_x) as f32, (-translate_y/zoom_y) as f32],
        })
    }

    ///
    /// Moves the target to a new glyph every few seconds, zooming out and back in between glyphs
    ///
    fn update_auto_pan(&mut self, timestamp: f64) {
        let auto_pan = match &mut self.auto_pan { Some(auto_pan) => auto_pan, None => return };
        let (_atlas, glyphs, layout) = match self.resources.ready() { Some(resources) => resources, None => return };

        let needs_target = auto_pan.last_change.map(|last| timestamp - last > AUTO_PAN_INTERVAL).unwrap_or(true);
        if needs_target {
            auto_pan.last_change = Some(timestamp);

            // Step through the pages, and through the glyphs on each page on each pass
            let num_pages   = layout.pages().len();
            let page_idx    = auto_pan.count % num_pages;
            let pass        = auto_pan.count / num_pages;
            let glyph_count = layout.pages()[page_idx].glyph_count();
            auto_pan.count  += 1;

            if glyph_count > 0 {
                let glyph_idx = (glyph_count / 2 + pass * 7919) % glyph_count;

                if let Some(centre) = layout.glyph_centre(page_idx, glyph_idx, glyphs) {
                    log::debug!("Auto-pan to glyph {} on page {}", glyph_idx, page_idx);
                    self.transform.focus_on(centre);
                }
            }
        }

        let last_change = auto_pan.last_change.unwrap_or(timestamp);
        let t           = (timestamp - last_change) / AUTO_PAN_INTERVAL;
        let target      = self.transform.target();
        self.transform.set_target(ViewTransform::new(target.x, target.y, auto_pan_zoom(t)));
    }
}
