use crate::constants::CLEAR_COLOR;
use snowfall_core::sprites;
use snowfall_core::{shader_source, Camera, FieldKind, FrameClock, SceneLayout, Sprite, SPRITE_SIZE};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FieldUniforms {
    model_view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    step: f32,
}

/// GPU resources of one particle field.
struct FieldGpu {
    kind: FieldKind,
    model: glam::Mat4,
    instance_vb: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    tree_pipeline: wgpu::RenderPipeline,
    snow_pipeline: wgpu::RenderPipeline,
    plane_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    spectrum_tex: wgpu::Texture,
    fields: Vec<FieldGpu>,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, layout: &SceneLayout) -> anyhow::Result<Self> {
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
        // Colors are authored as-is (no sRGB encode), so prefer a linear-free UNORM target
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("field_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    // uniforms
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    // point sprite
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    // sprite sampler
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    // spectrum, read with textureLoad (tree only)
                    binding: 3,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: false },
                    },
                    count: None,
                },
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("field_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let make_pipeline = |kind: FieldKind, label: &str| {
            let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(shader_source(kind).into()),
            });
            helpers::make_field_pipeline(&device, label, &pipeline_layout, &shader, format)
        };
        let tree_pipeline = make_pipeline(FieldKind::Tree, "tree_pipeline");
        let snow_pipeline = make_pipeline(FieldKind::Snow, "snow_pipeline");
        let plane_pipeline = make_pipeline(FieldKind::Plane, "plane_pipeline");

        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&helpers::QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let spectrum_tex = helpers::create_spectrum_texture(&device);
        let spectrum_view = spectrum_tex.create_view(&wgpu::TextureViewDescriptor::default());

        // One texture per distinct sprite, shared by the fields that use it
        let mut sprite_views: Vec<(Sprite, wgpu::TextureView)> = Vec::new();
        let mut fields = Vec::with_capacity(layout.fields.len());
        for (i, field) in layout.fields.iter().enumerate() {
            if !sprite_views.iter().any(|(s, _)| *s == field.sprite) {
                let image = sprites::render(field.sprite, SPRITE_SIZE)?;
                let label = format!("sprite_{:?}", field.sprite);
                let view = helpers::create_sprite_texture(&device, &queue, &label, &image);
                sprite_views.push((field.sprite, view));
            }
            let sprite_view = sprite_views
                .iter()
                .find(|(s, _)| *s == field.sprite)
                .map(|(_, v)| v)
                .ok_or_else(|| anyhow::anyhow!("sprite {:?} missing", field.sprite))?;

            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("field_uniforms"),
                size: std::mem::size_of::<FieldUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("field_bg"),
                layout: &bgl,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(sprite_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 3,
                        resource: wgpu::BindingResource::TextureView(&spectrum_view),
                    },
                ],
            });
            let label = format!("field_{}_{:?}", i, field.kind);
            fields.push(FieldGpu {
                kind: field.kind,
                model: field.model_matrix(),
                instance_vb: helpers::create_instance_buffer(&device, &label, &field.particles),
                instance_count: field.particles.len() as u32,
                uniform_buffer,
                bind_group,
            });
        }
        log::info!(
            "[gpu] format={:?} size={}x{} fields={} points={}",
            format,
            width,
            height,
            fields.len(),
            layout.total_points()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            tree_pipeline,
            snow_pipeline,
            plane_pipeline,
            quad_vb,
            spectrum_tex,
            fields,
            width,
            height,
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

    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload the latest byte spectrum; extra bins are ignored, missing ones keep old data.
    pub fn upload_spectrum(&self, spectrum: &[u8]) {
        let extent = helpers::spectrum_extent();
        let n = (extent.width as usize).min(spectrum.len());
        if n == 0 {
            return;
        }
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.spectrum_tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &spectrum[..n],
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(n as u32),
                rows_per_image: None,
            },
            wgpu::Extent3d {
                width: n as u32,
                ..extent
            },
        );
    }

    fn pipeline_for(&self, kind: FieldKind) -> &wgpu::RenderPipeline {
        match kind {
            FieldKind::Tree => &self.tree_pipeline,
            FieldKind::Snow => &self.snow_pipeline,
            FieldKind::Plane => &self.plane_pipeline,
        }
    }

    pub fn render(&mut self, camera: &Camera, clock: &FrameClock) -> Result<(), wgpu::SurfaceError> {
        let view_m = camera.view_matrix();
        let projection = camera.projection_matrix().to_cols_array_2d();
        for field in &self.fields {
            let u = FieldUniforms {
                model_view: (view_m * field.model).to_cols_array_2d(),
                projection,
                resolution: [self.width as f32, self.height as f32],
                time: clock.time,
                step: clock.step,
            };
            self.queue
                .write_buffer(&field.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
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
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            for field in self.fields.iter().filter(|f| f.instance_count > 0) {
                rpass.set_pipeline(self.pipeline_for(field.kind));
                rpass.set_bind_group(0, &field.bind_group, &[]);
                rpass.set_vertex_buffer(1, field.instance_vb.slice(..));
                rpass.draw(0..6, 0..field.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
