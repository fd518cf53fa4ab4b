use crate::constants::{CLEAR_COLOR, FOG_DENSITY, LINE_BUFFER_INITIAL, POINT_BUFFER_INITIAL};
use morph_core::{Camera, FrameGeometry, LineVertex, MorphError, PointVertex, RenderSurface};
use web_sys as web;

mod buffers;
mod pipelines;

use buffers::DynamicBuffer;
use pipelines::{create_network_pipelines, NetworkPipelines, SceneUniforms};

pub(crate) static NETWORK_WGSL: &str = include_str!("../shaders/network.wgsl");

const POINT_STRIDE: u64 = std::mem::size_of::<PointVertex>() as u64;
const LINE_STRIDE: u64 = std::mem::size_of::<LineVertex>() as u64;

/// WebGPU render surface for the morph scene.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipelines: NetworkPipelines,
    point_buffer: DynamicBuffer,
    line_buffer: DynamicBuffer,
    camera: Camera,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| MorphError::MissingDependency("WebGPU adapter".into()))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Hex colours are authored for direct display, so prefer a non-sRGB target.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| MorphError::MissingDependency("surface format".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipelines = create_network_pipelines(&device, format);
        let point_buffer = DynamicBuffer::new(
            &device,
            "point_instances",
            POINT_BUFFER_INITIAL as u64 * POINT_STRIDE,
        );
        let line_buffer = DynamicBuffer::new(
            &device,
            "line_vertices",
            LINE_BUFFER_INITIAL as u64 * LINE_STRIDE,
        );

        let mut camera = Camera::default();
        camera.set_viewport(width, height);
        log::info!("[render] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipelines,
            point_buffer,
            line_buffer,
            camera,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_viewport(width, height);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn write_uniforms(&self) {
        let u = SceneUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            resolution: [self.width as f32, self.height as f32],
            fog_density: FOG_DENSITY,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.pipelines.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

impl<'a> RenderSurface for GpuState<'a> {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, frame: &FrameGeometry) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_uniforms();
        self.point_buffer
            .write(&self.device, &self.queue, &frame.points);
        self.line_buffer.write(&self.device, &self.queue, &frame.lines);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.pipelines.bind_group, &[]);

            if self.line_buffer.len() > 0 {
                rpass.set_pipeline(&self.pipelines.lines);
                rpass.set_vertex_buffer(0, self.line_buffer.slice(LINE_STRIDE));
                rpass.draw(0..self.line_buffer.len(), 0..1);
            }
            if self.point_buffer.len() > 0 {
                rpass.set_pipeline(&self.pipelines.points);
                rpass.set_vertex_buffer(0, self.point_buffer.slice(POINT_STRIDE));
                rpass.draw(0..6, 0..self.point_buffer.len());
            }
        }

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
