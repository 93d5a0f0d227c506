//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Shape pipeline and MSAA target
//! - Draw list tessellation and frame submission

use std::sync::Arc;
use winit::window::Window;
use pgrid_render::{
    context::{ContextError, RenderContext},
    pipeline::ShapePipeline,
    DrawList, ShapeGeometry, Vec2,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ShapePipeline,
    geometry: ShapeGeometry,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let scale_factor = window.scale_factor();
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let sample_count = context.supported_sample_count(render_config.msaa_samples);
        if sample_count != render_config.msaa_samples.max(1) {
            log::warn!(
                "MSAA x{} unsupported, using x{}",
                render_config.msaa_samples,
                sample_count
            );
        }

        let mut pipeline = ShapePipeline::new(&context.device, context.config.format, sample_count);
        pipeline.ensure_msaa_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        let geometry = ShapeGeometry::new()
            .with_min_line_width(render_config.min_line_width / scale_factor as f32);

        log::info!(
            "Renderer ready: {:?}, {}x{}, MSAA x{}",
            context.config.format,
            context.config.width,
            context.config.height,
            sample_count
        );

        Ok(Self {
            context,
            pipeline,
            geometry,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_msaa_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Track a new scale factor so sub-pixel strokes stay one device pixel wide
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.geometry
            .set_min_line_width(self.render_config.min_line_width / scale_factor as f32);
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    ///
    /// `logical_size` is the viewport in the same units as the draw list.
    pub fn render_frame(
        &mut self,
        draw_list: &DrawList,
        logical_size: Vec2,
    ) -> Result<(), RenderError> {
        // Tessellate and upload
        self.geometry.rebuild(draw_list);
        self.pipeline.upload(
            &self.context.device,
            &self.context.queue,
            &self.geometry.vertices,
        );
        self.pipeline
            .update_view(&self.context.queue, logical_size.x, logical_size.y);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
