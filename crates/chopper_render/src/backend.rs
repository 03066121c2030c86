//! [`RenderBackend`] implementation on top of wgpu

use std::sync::Arc;

use chopper_core::{ModelVertex, RenderBackend};
use chopper_math::Mat4;
use winit::{dpi::PhysicalSize, window::Window};

use crate::{ModelPipeline, RenderContext, RenderError};

/// GPU options taken from the `rendering` config section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackendOptions {
    pub vsync: bool,
    pub cull_back_faces: bool,
    /// RGBA clear colour
    pub background_color: [f32; 4],
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            vsync: true,
            cull_back_faces: true,
            background_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Clear colour conversion for wgpu
pub fn clear_color(rgba: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: rgba[0] as f64,
        g: rgba[1] as f64,
        b: rgba[2] as f64,
        a: rgba[3] as f64,
    }
}

/// Draws the model into a window surface
pub struct GpuBackend {
    context: RenderContext,
    pipeline: ModelPipeline,
    clear_color: wgpu::Color,
}

impl GpuBackend {
    /// Create a backend bound to `window`
    pub async fn new(window: Arc<Window>, options: BackendOptions) -> Result<Self, RenderError> {
        let context = RenderContext::new(window, options.vsync).await?;
        let pipeline = ModelPipeline::new(&context.device, context.config.format, options.cull_back_faces);

        log::info!(
            "GPU backend ready: {}x{} {:?}",
            context.config.width,
            context.config.height,
            context.config.format
        );

        Ok(Self {
            context,
            pipeline,
            clear_color: clear_color(options.background_color),
        })
    }

    /// Follow a window resize
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
    }
}

impl RenderBackend for GpuBackend {
    type Error = RenderError;

    fn upload_model(&mut self, vertices: &[ModelVertex]) -> Result<(), RenderError> {
        self.pipeline.upload_vertices(&self.context.device, vertices);
        Ok(())
    }

    fn viewport(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    fn draw(&mut self, matrix: &Mat4, vertex_count: u32) -> Result<(), RenderError> {
        let (width, height) = (self.context.config.width, self.context.config.height);
        self.pipeline.ensure_depth_texture(&self.context.device, width, height);
        self.pipeline.update_matrix(&self.context.queue, matrix);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(err) => {
                let err = RenderError::from(err);
                if matches!(err, RenderError::SurfaceLost) {
                    self.context.reconfigure();
                }
                return Err(err);
            }
        };
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Model Render Encoder"),
        });
        self.pipeline.render(&mut encoder, &view, vertex_count, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
