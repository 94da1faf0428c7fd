use crate::core::constants::{rgb_from_hex, ICON_EMISSIVE_HEX, ICON_SIZE};
use crate::core::{AnimationDirector, SceneConfig};
use glam::Mat4;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod mesh;
mod textures;

use helpers::{linear_rgb, make_scene_pipeline};
use mesh::{box_mesh, plane_mesh, InstanceRaw, MeshData, Vertex};
use textures::IconTextures;

static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    ambient: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
}

impl Globals {
    fn new(config: &SceneConfig, view_proj: Mat4) -> Self {
        let scale = |rgb: [f32; 3], k: f32| {
            let [r, g, b] = linear_rgb(rgb);
            [r * k, g * k, b * k, 1.0]
        };
        let p = config.point_position;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            ambient: scale(config.ambient_color, config.ambient_intensity),
            light_pos: [p.x, p.y, p.z, config.point_range.max(1e-3)],
            light_color: scale(config.point_color, config.point_intensity),
        }
    }
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// WebGPU resources for drawing the director's scene onto the canvas.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    tile_pipeline: wgpu::RenderPipeline,
    icon_pipeline: wgpu::RenderPipeline,
    tile_mesh: GpuMesh,
    icon_mesh: GpuMesh,
    icons: IconTextures,

    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<InstanceRaw>,

    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    tile_color: [f32; 4],
    icon_emissive: [f32; 4],
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        scene: &SceneConfig,
        icon_count: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: the page background shows through once tiles fade.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let icons = IconTextures::new(&device, icon_count);

        let tile_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tile_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let icon_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("icon_pl"),
            bind_group_layouts: &[&globals_bgl, icons.layout()],
            push_constant_ranges: &[],
        });
        let buffers = [Vertex::layout(), InstanceRaw::layout()];
        let tile_pipeline = make_scene_pipeline(
            &device,
            "tile_pipeline",
            &tile_layout,
            &shader,
            "fs_tile",
            format,
            &buffers,
            true,
            Some(wgpu::Face::Back),
        );
        // Icons ignore depth so they always composite in front of the tiles.
        let icon_pipeline = make_scene_pipeline(
            &device,
            "icon_pipeline",
            &icon_layout,
            &shader,
            "fs_icon",
            format,
            &buffers,
            false,
            None,
        );

        let tile_mesh = GpuMesh::upload(
            &device,
            "tile_mesh",
            &box_mesh(scene.tile_width, scene.tile_width, scene.tile_thickness),
        );
        let icon_mesh = GpuMesh::upload(
            &device,
            "icon_mesh",
            &plane_mesh(ICON_SIZE, ICON_SIZE),
        );

        let instance_capacity = 256;
        let instance_buffer = create_instance_buffer(&device, instance_capacity);
        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);

        let [r, g, b] = linear_rgb(scene.tile_color);
        let [er, eg, eb] = linear_rgb(rgb_from_hex(ICON_EMISSIVE_HEX));

        log::info!("[gpu] ready {}x{} format={:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals_buffer,
            globals_bg,
            tile_pipeline,
            icon_pipeline,
            tile_mesh,
            icon_mesh,
            icons,
            instance_buffer,
            instance_capacity,
            instances: Vec::with_capacity(instance_capacity),
            depth_view,
            width,
            height,
            tile_color: [r, g, b, 1.0],
            icon_emissive: [er, eg, eb, 0.0],
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        (_, self.depth_view) = helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    /// Upload RGBA8 pixels (`size × size`) for icon `index`.
    pub fn upload_icon(&mut self, index: usize, rgba: &[u8], size: u32) {
        self.icons.upload(&self.device, &self.queue, index, rgba, size);
    }

    pub fn render(&mut self, director: &AnimationDirector) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let globals = Globals::new(director.config(), director.camera().view_projection());
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        // Icons follow the tiles in render order; both share one instance buffer.
        let mut overlays: Vec<_> = director
            .icons()
            .iter()
            .filter(|o| self.icons.is_loaded(o.icon))
            .collect();
        overlays.sort_by_key(|o| o.render_order);

        // Tiles blend, so they go back to front.
        self.instances.clear();
        for tile in director.tiles_back_to_front() {
            let mut color = self.tile_color;
            color[3] = tile.opacity;
            self.instances.push(InstanceRaw {
                model: tile.model_matrix().to_cols_array_2d(),
                color,
                emissive: [0.0; 4],
            });
        }
        let tile_count = self.instances.len() as u32;
        for overlay in &overlays {
            self.instances.push(InstanceRaw {
                model: overlay.model_matrix().to_cols_array_2d(),
                color: [1.0, 1.0, 1.0, overlay.opacity],
                emissive: self.icon_emissive,
            });
        }
        self.ensure_instance_capacity(self.instances.len());
        if !self.instances.is_empty() {
            self.queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&self.instances),
            );
        }

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
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            if tile_count > 0 {
                rpass.set_pipeline(&self.tile_pipeline);
                rpass.set_vertex_buffer(0, self.tile_mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(
                    self.tile_mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint16,
                );
                rpass.draw_indexed(0..self.tile_mesh.index_count, 0, 0..tile_count);
            }

            if !overlays.is_empty() {
                rpass.set_pipeline(&self.icon_pipeline);
                rpass.set_vertex_buffer(0, self.icon_mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(
                    self.icon_mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint16,
                );
                for (k, overlay) in overlays.iter().enumerate() {
                    if let Some(bg) = self.icons.bind_group(overlay.icon) {
                        let i = tile_count + k as u32;
                        rpass.set_bind_group(1, bg, &[]);
                        rpass.draw_indexed(0..self.icon_mesh.index_count, 0, i..i + 1);
                    }
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn ensure_instance_capacity(&mut self, needed: usize) {
        if needed <= self.instance_capacity {
            return;
        }
        self.instance_capacity = needed.next_power_of_two();
        self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
        log::debug!("[gpu] instance buffer grown to {}", self.instance_capacity);
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (capacity.max(1) * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
