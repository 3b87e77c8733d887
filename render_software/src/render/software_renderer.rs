use super::band_frame_renderer::*;
use super::draw_call::*;
use super::frame_size::*;
use super::renderer::*;
use super::rgba_frame::*;

use crate::kernel::*;
use crate::pixel::*;
use crate::raster::*;

use flo_curve_atlas::*;
use flo_glyph_render::*;

use std::collections::{HashMap};
use std::ops::{Range};
use std::sync::*;

///
/// Renders a stream of render actions to an RGBA frame in software
///
/// Triangle strips are rasterised on the CPU, and glyph pixels are shaded by evaluating their coverage from the
/// curve atlas, in the same way a GPU would run the glyph shader.
///
pub struct SoftwareRenderer {
    /// The frame that's being drawn to
    frame: RgbaFrame,

    /// Vertex buffers containing glyph quads
    glyph_buffers: HashMap<VertexBufferId, Arc<Vec<GlyphVertex>>>,

    /// Vertex buffers containing page rectangles
    page_buffers: HashMap<VertexBufferId, Vec<PageVertex>>,

    /// The curve atlases that are available to the glyph shader
    atlases: HashMap<AtlasId, CurveAtlas>,

    /// The shader set by the last `UseShader` action
    shader: Option<ShaderType>,

    /// How new fragments are combined with the frame
    blend_mode: BlendMode,

    /// The multiply-add pair applied to vertex positions
    transform: PositionTransform,

    /// Evaluates the coverage of glyph pixels
    kernel: DefaultCoverageKernel,

    /// The number of frames that have been shown
    frames_shown: usize,

    /// True if actions have been rendered since the last `ShowFrameBuffer`
    in_frame: bool,

    #[cfg(feature="profile")]
    profiler: RenderActionProfiler,
}

impl SoftwareRenderer {
    ///
    /// Creates a renderer that draws to a frame of the specified size
    ///
    pub fn new(size: FrameSize) -> SoftwareRenderer {
        SoftwareRenderer {
            frame:          RgbaFrame::new(size),
            glyph_buffers:  HashMap::new(),
            page_buffers:   HashMap::new(),
            atlases:        HashMap::new(),
            shader:         None,
            blend_mode:     BlendMode::SourceOver,
            transform:      PositionTransform::identity(),
            kernel:         DefaultCoverageKernel::new(),
            frames_shown:   0,
            in_frame:       false,

            #[cfg(feature="profile")]
            profiler:       RenderActionProfiler::new(),
        }
    }

    /// The frame that's being drawn to
    #[inline] pub fn frame(&self) -> &RgbaFrame { &self.frame }

    /// The number of times `ShowFrameBuffer` has been rendered
    #[inline] pub fn frames_shown(&self) -> usize { self.frames_shown }

    ///
    /// Changes the size of the frame (its contents are cleared)
    ///
    pub fn resize(&mut self, size: FrameSize) {
        if size != self.frame.size() {
            log::debug!("Resizing software frame to {}x{}", size.width, size.height);
            self.frame.resize(size);
        }
    }

    ///
    /// Renders a list of actions
    ///
    pub fn render<TActions>(&mut self, actions: TActions)
    where
        TActions: IntoIterator<Item=RenderAction>,
    {
        for action in actions {
            self.render_action(action);
        }
    }

    ///
    /// Renders a single action
    ///
    pub fn render_action(&mut self, action: RenderAction) {
        #[cfg(feature="profile")]
        {
            if !self.in_frame { self.profiler.start_frame(); }
            self.profiler.start_render_action(&action);
        }

        self.in_frame = true;

        match action {
            RenderAction::SetTransform(transform)                 => { self.transform = transform; }
            RenderAction::CreateGlyphVertexBuffer(id, vertices)   => { self.page_buffers.remove(&id); self.glyph_buffers.insert(id, vertices); }
            RenderAction::CreatePageVertexBuffer(id, vertices)    => { self.glyph_buffers.remove(&id); self.page_buffers.insert(id, vertices); }
            RenderAction::FreeVertexBuffer(id)                    => { self.glyph_buffers.remove(&id); self.page_buffers.remove(&id); }
            RenderAction::CreateCurveAtlas(id, atlas)             => { self.atlases.insert(id, atlas); }
            RenderAction::FreeCurveAtlas(id)                      => { self.atlases.remove(&id); }
            RenderAction::BlendMode(blend_mode)                   => { self.blend_mode = blend_mode; }
            RenderAction::Clear(color)                            => { self.frame.clear(F32LinearPixel::from_straight_rgba(color.to_f32())); }
            RenderAction::UseShader(shader)                       => { self.shader = Some(shader); }
            RenderAction::DrawTriangleStrip(id, range)            => { self.draw_triangle_strip(id, range); }
            RenderAction::ShowFrameBuffer                         => { self.show_frame_buffer(); }
        }
    }

    ///
    /// Draws a range of a vertex buffer using the current shader
    ///
    fn draw_triangle_strip(&mut self, buffer_id: VertexBufferId, range: Range<usize>) {
        let stage = VertexStage::new(self.transform, self.frame.size().as_tuple());

        let draw_call = match self.shader {
            None => {
                log::warn!("Triangle strip drawn from {:?} before a shader was chosen", buffer_id);
                return;
            }

            Some(ShaderType::PageBackground { color }) => {
                let Some(vertices) = self.page_buffers.get(&buffer_id) else {
                    log::warn!("Page background drawn from missing vertex buffer {:?}", buffer_id);
                    return;
                };

                DrawCall::Pages {
                    triangles:  page_primitives(vertices, range, &stage),
                    color:      F32LinearPixel::from_straight_rgba(color.to_f32()),
                    blend_mode: self.blend_mode,
                }
            }

            Some(ShaderType::Glyph { atlas, show_grids }) => {
                let Some(vertices) = self.glyph_buffers.get(&buffer_id) else {
                    log::warn!("Glyphs drawn from missing vertex buffer {:?}", buffer_id);
                    return;
                };
                let Some(atlas) = self.atlases.get(&atlas) else {
                    log::warn!("Glyphs drawn with missing curve atlas {:?}", atlas);
                    return;
                };

                #[cfg(feature="profile")]
                self.profiler.count_page();

                DrawCall::Glyphs {
                    primitives: glyph_primitives(vertices, range, &stage, atlas),
                    show_grids: show_grids,
                    blend_mode: self.blend_mode,
                }
            }
        };

        #[cfg(feature="profile")]
        self.profiler.count_primitives(draw_call.primitive_count());

        if draw_call.primitive_count() == 0 {
            return;
        }

        let size        = self.frame.size();
        let renderer    = BandFrameRenderer::new(DrawCallRenderer::new(&self.kernel));
        renderer.render(&size, &draw_call, self.frame.pixels_mut());
    }

    ///
    /// Finishes the current frame
    ///
    fn show_frame_buffer(&mut self) {
        self.frames_shown   += 1;
        self.in_frame       = false;

        #[cfg(feature="profile")]
        {
            self.profiler.finish_frame();
            self.profiler.log_summary();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clear_fills_frame() {
        let mut renderer = SoftwareRenderer::new(FrameSize { width: 16, height: 16 });
        renderer.render(vec![RenderAction::Clear(Rgba8([0, 0, 255, 255])), RenderAction::ShowFrameBuffer]);

        assert!(renderer.frame().pixel(15, 15) == Some([0, 0, 255, 255]));
        assert!(renderer.frames_shown() == 1);
    }

    #[test]
    fn page_background_fills_rectangle() {
        let mut renderer    = SoftwareRenderer::new(FrameSize { width: 20, height: 20 });
        let vertices        = vec![
            PageVertex::with_pos(-0.5, -0.5), PageVertex::with_pos(-0.5, -0.5),
            PageVertex::with_pos(0.5, -0.5), PageVertex::with_pos(-0.5, 0.5),
            PageVertex::with_pos(0.5, 0.5), PageVertex::with_pos(0.5, 0.5)
        ];

        renderer.render(vec![
            RenderAction::CreatePageVertexBuffer(VertexBufferId(1), vertices),
            RenderAction::Clear(Rgba8([0, 0, 0, 255])),
            RenderAction::BlendMode(BlendMode::Opaque),
            RenderAction::UseShader(ShaderType::PageBackground { color: Rgba8([255, 255, 255, 255]) }),
            RenderAction::DrawTriangleStrip(VertexBufferId(1), 0..6),
        ]);

        assert!(renderer.frame().pixel(10, 10) == Some([255, 255, 255, 255]));
        assert!(renderer.frame().pixel(1, 1) == Some([0, 0, 0, 255]));
        assert!(renderer.frame().pixel(18, 18) == Some([0, 0, 0, 255]));
    }

    #[test]
    fn missing_buffer_draws_nothing() {
        let mut renderer = SoftwareRenderer::new(FrameSize { width: 4, height: 4 });

        renderer.render(vec![
            RenderAction::Clear(Rgba8([10, 20, 30, 255])),
            RenderAction::UseShader(ShaderType::PageBackground { color: Rgba8([255, 255, 255, 255]) }),
            RenderAction::DrawTriangleStrip(VertexBufferId(7), 0..6),
        ]);

        assert!(renderer.frame().pixel(2, 2) == Some([10, 20, 30, 255]));
    }
}
