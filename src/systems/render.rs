//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Line pipeline and line buffers
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use ndcube_core::Animator;
use ndcube_render::{
    camera::OrbitCamera,
    context::{ContextError, RenderContext},
    pipeline::{euler_rotation_matrix, LinePipeline, LineUniforms},
    dimension_color, hue_color, GpuLines, LineGeometry,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
    /// GPU setup failed
    Context(ContextError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Color for the main cube: the dimension palette, or a cycling hue
pub fn base_color(animator: &Animator, config: &RenderingConfig) -> [f32; 4] {
    if config.hue_cycling {
        hue_color(animator.hue() as f32)
    } else {
        dimension_color(animator.params().dimension())
    }
}

/// Model transform spinning the projected object in display space
pub fn model_matrix(animator: &Animator) -> [[f32; 4]; 4] {
    euler_rotation_matrix(animator.spin_angles().map(|a| a as f32))
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: LinePipeline,
    lines: GpuLines,
    line_geometry: LineGeometry,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut pipeline = LinePipeline::new(&context.device, context.config.format);
        pipeline.ensure_depth_texture(&context.device, context.size.width, context.size.height);

        let lines = GpuLines::new(&context.device);

        Ok(Self {
            context,
            pipeline,
            lines,
            line_geometry: LineGeometry::new(),
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(&self.context.device, width, height);
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame of the animator's current projection
    pub fn render_frame(
        &mut self,
        camera: &OrbitCamera,
        animator: &Animator,
        model_scale: f32,
    ) -> Result<(), RenderError> {
        let color = base_color(animator, &self.render_config);
        self.line_geometry
            .fill(animator.geometry(), animator.segments(), color);
        self.lines.upload(
            &self.context.device,
            &self.context.queue,
            &self.line_geometry,
            animator.topology_generation(),
        );

        let uniforms = LineUniforms {
            view_proj: camera.view_projection(self.context.aspect_ratio()),
            model: model_matrix(animator),
            opacity: self.render_config.line_opacity,
            model_scale,
            _padding: [0.0; 2],
        };
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);

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
            self.lines.vertex_buffer(),
            self.lines.index_buffer(),
            self.lines.index_count(),
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
