use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

use crate::constants::{
    BLOOM_RADIUS, BLOOM_STRENGTH, BLOOM_THRESHOLD, CAMERA_FAR, CAMERA_FOV_RADIANS, CAMERA_NEAR,
    FOG_DENSITY, NEON_PLANE_OPACITY, NEON_TINTS, PARTICLE_SIZE, RADIAL_BLUR_CENTER,
    SHAPE_OPACITY, TUNNEL_LINE_OPACITY,
};
use crate::core::constants::{
    MOVING_SHAPE_COUNT, NEON_PLANE_COUNT, RADIAL_SEGMENTS, TUBULAR_SEGMENTS, TUNNEL_RADIUS,
};
use crate::core::scene::ShapeKind;
use crate::core::{ClosedCurve, SceneAnimationState};

mod geometry;
mod helpers;
mod post;
mod targets;

use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    cam_pos_fog: [f32; 4],
    line_color: [f32; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    shape_color: [f32; 4],
    particle_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    texel: [f32; 2],
    direction: [f32; 2],
    center: [f32; 2],
    inv_resolution: [f32; 2],
    threshold: f32,
    strength: f32,
    radius: f32,
    amount: f32,
    angle: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PlaneInstance {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
}

struct SceneResources {
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    line_pipeline: wgpu::RenderPipeline,
    shape_pipeline: wgpu::RenderPipeline,
    plane_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    grid_vb: wgpu::Buffer,
    grid_vertex_count: u32,
    box_vb: wgpu::Buffer,
    box_vertex_count: u32,
    ico_vb: wgpu::Buffer,
    ico_vertex_count: u32,
    quad_vb: wgpu::Buffer,
    shape_instance_vb: wgpu::Buffer,
    plane_instance_vb: wgpu::Buffer,
    particle_instance_vb: wgpu::Buffer,
    particle_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: SceneResources,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    bg_bright: wgpu::BindGroup,
    bg_blur_h: wgpu::BindGroup,
    bg_blur_v: wgpu::BindGroup,
    bg_composite: wgpu::BindGroup,
    bg_bloom_aux: wgpu::BindGroup,
    bg_radial: wgpu::BindGroup,
    bg_rgb: wgpu::BindGroup,
    bg_fxaa: wgpu::BindGroup,

    width: u32,
    height: u32,
    cam_eye: Vec3,
    cam_target: Vec3,
    line_color: [f32; 3],
    radial_strength: f32,
    rgb_amount: f32,
    rgb_angle: f32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        curve: &ClosedCurve,
        scene_state: &SceneAnimationState,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
                    // Default limits: older WebGPU impls reject unknown fields
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::create(&device, width, height);
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let scene = create_scene_resources(&device, curve, scene_state);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, format);

        let (
            bg_bright,
            bg_blur_h,
            bg_blur_v,
            bg_composite,
            bg_bloom_aux,
            bg_radial,
            bg_rgb,
            bg_fxaa,
        ) = build_post_bind_groups(&device, &post, &targets, &linear_sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            linear_sampler,
            post,
            bg_bright,
            bg_blur_h,
            bg_blur_v,
            bg_composite,
            bg_bloom_aux,
            bg_radial,
            bg_rgb,
            bg_fxaa,
            width,
            height,
            cam_eye: Vec3::ZERO,
            cam_target: Vec3::Z,
            line_color: [0.0, 1.0, 1.0],
            radial_strength: 0.0,
            rgb_amount: 0.0,
            rgb_angle: 0.0,
            time_accum: 0.0,
        })
    }

    pub fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        self.cam_eye = eye;
        self.cam_target = target;
    }

    pub fn set_line_color(&mut self, rgb: [f32; 3]) {
        self.line_color = rgb;
    }

    /// Radial blur gain; zero renders the pass as a plain copy.
    pub fn set_blur_strength(&mut self, strength: f32) {
        self.radial_strength = strength.max(0.0);
    }

    pub fn set_chromatic_shift(&mut self, amount: f32, angle: f32) {
        self.rgb_amount = amount;
        self.rgb_angle = angle;
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
            self.targets.recreate(&self.device, width, height);
            let (
                bg_bright,
                bg_blur_h,
                bg_blur_v,
                bg_composite,
                bg_bloom_aux,
                bg_radial,
                bg_rgb,
                bg_fxaa,
            ) = build_post_bind_groups(
                &self.device,
                &self.post,
                &self.targets,
                &self.linear_sampler,
            );
            self.bg_bright = bg_bright;
            self.bg_blur_h = bg_blur_h;
            self.bg_blur_v = bg_blur_v;
            self.bg_composite = bg_composite;
            self.bg_bloom_aux = bg_bloom_aux;
            self.bg_radial = bg_radial;
            self.bg_rgb = bg_rgb;
            self.bg_fxaa = bg_fxaa;
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        scene_state: &SceneAnimationState,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_scene_uniforms(scene_state);
        let box_count = self.write_shape_instances(scene_state);
        self.write_plane_instances(scene_state);
        self.write_post_uniforms();

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let s = &self.scene;
            rpass.set_bind_group(0, &s.bind_group, &[]);

            rpass.set_pipeline(&s.line_pipeline);
            rpass.set_vertex_buffer(0, s.grid_vb.slice(..));
            rpass.draw(0..s.grid_vertex_count, 0..1);

            // shapes: the instance buffer is packed boxes first, then icosahedra
            let total = MOVING_SHAPE_COUNT as u32;
            rpass.set_pipeline(&s.shape_pipeline);
            rpass.set_vertex_buffer(1, s.shape_instance_vb.slice(..));
            if box_count > 0 {
                rpass.set_vertex_buffer(0, s.box_vb.slice(..));
                rpass.draw(0..s.box_vertex_count, 0..box_count);
            }
            if box_count < total {
                rpass.set_vertex_buffer(0, s.ico_vb.slice(..));
                rpass.draw(0..s.ico_vertex_count, box_count..total);
            }

            rpass.set_pipeline(&s.plane_pipeline);
            rpass.set_vertex_buffer(0, s.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, s.plane_instance_vb.slice(..));
            rpass.draw(0..6, 0..NEON_PLANE_COUNT as u32);

            rpass.set_pipeline(&s.particle_pipeline);
            rpass.set_vertex_buffer(0, s.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, s.particle_instance_vb.slice(..));
            rpass.draw(0..6, 0..s.particle_count);
        }

        // bloom: bright pass then separable blur at half resolution
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.bg_bright,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.bg_blur_h,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.bg_blur_v,
            None,
        );
        // composite + tonemap, then the fullscreen effects in a fixed order;
        // FXAA runs last so it smooths everything the other passes produced
        post::blit(
            &mut encoder,
            "bloom_composite",
            &self.targets.ping_view,
            &self.post.composite_pipeline,
            &self.bg_composite,
            Some(&self.bg_bloom_aux),
        );
        post::blit(
            &mut encoder,
            "radial_blur",
            &self.targets.pong_view,
            &self.post.radial_pipeline,
            &self.bg_radial,
            None,
        );
        post::blit(
            &mut encoder,
            "rgb_shift",
            &self.targets.ping_view,
            &self.post.rgb_pipeline,
            &self.bg_rgb,
            None,
        );
        post::blit(
            &mut encoder,
            "fxaa",
            &view,
            &self.post.fxaa_pipeline,
            &self.bg_fxaa,
            None,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn write_scene_uniforms(&self, scene_state: &SceneAnimationState) {
        let aspect = self.width.max(1) as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOV_RADIANS, aspect, CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::look_at_rh(self.cam_eye, self.cam_target, Vec3::Y);
        let forward = (self.cam_target - self.cam_eye).normalize_or_zero();
        let right = if forward.cross(Vec3::Y).length_squared() > 0.0 {
            forward.cross(Vec3::Y).normalize()
        } else {
            Vec3::X
        };
        let up = right.cross(forward);
        let u = SceneUniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            cam_pos_fog: [self.cam_eye.x, self.cam_eye.y, self.cam_eye.z, FOG_DENSITY],
            line_color: [
                self.line_color[0],
                self.line_color[1],
                self.line_color[2],
                TUNNEL_LINE_OPACITY,
            ],
            cam_right: [right.x, right.y, right.z, PARTICLE_SIZE * 0.5],
            cam_up: [up.x, up.y, up.z, 0.0],
            shape_color: [
                scene_state.shape_color[0],
                scene_state.shape_color[1],
                scene_state.shape_color[2],
                SHAPE_OPACITY,
            ],
            particle_color: [
                scene_state.particle_color[0],
                scene_state.particle_color[1],
                scene_state.particle_color[2],
                1.0,
            ],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    /// Uploads shape model matrices, boxes before icosahedra so each kind
    /// draws as one contiguous instance range. Returns the box count.
    fn write_shape_instances(&self, scene_state: &SceneAnimationState) -> u32 {
        let mut models: Vec<[[f32; 4]; 4]> = Vec::with_capacity(scene_state.moving.len());
        for kind in [ShapeKind::Box, ShapeKind::Icosahedron] {
            for shape in scene_state.moving.iter().filter(|s| s.kind == kind) {
                models
                    .push(Mat4::from_rotation_translation(shape.rotation, shape.position)
                        .to_cols_array_2d());
            }
        }
        self.queue.write_buffer(
            &self.scene.shape_instance_vb,
            0,
            bytemuck::cast_slice(&models),
        );
        scene_state
            .moving
            .iter()
            .filter(|s| s.kind == ShapeKind::Box)
            .count() as u32
    }

    fn write_plane_instances(&self, scene_state: &SceneAnimationState) {
        let instances: Vec<PlaneInstance> = scene_state
            .planes
            .iter()
            .map(|p| {
                let tint = NEON_TINTS[p.texture_index % NEON_TINTS.len()];
                PlaneInstance {
                    model: Mat4::from_scale_rotation_translation(
                        Vec3::splat(p.scale),
                        p.facing,
                        p.position,
                    )
                    .to_cols_array_2d(),
                    tint: [tint[0], tint[1], tint[2], NEON_PLANE_OPACITY],
                }
            })
            .collect();
        self.queue.write_buffer(
            &self.scene.plane_instance_vb,
            0,
            bytemuck::cast_slice(&instances),
        );
    }

    fn write_post_uniforms(&self) {
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        let half_texel = [2.0 / w, 2.0 / h];
        let base = PostUniforms {
            texel: [1.0 / w, 1.0 / h],
            direction: [0.0, 0.0],
            center: RADIAL_BLUR_CENTER,
            inv_resolution: [1.0 / w, 1.0 / h],
            threshold: BLOOM_THRESHOLD,
            strength: 0.0,
            radius: 1.0,
            amount: 0.0,
            angle: 0.0,
            _pad: [0.0; 3],
        };
        let write = |buf: &wgpu::Buffer, u: PostUniforms| {
            self.queue.write_buffer(buf, 0, bytemuck::bytes_of(&u));
        };
        write(&self.post.ub_bright, base);
        write(
            &self.post.ub_blur_h,
            PostUniforms {
                texel: half_texel,
                direction: [1.0, 0.0],
                radius: 1.0 + BLOOM_RADIUS,
                ..base
            },
        );
        write(
            &self.post.ub_blur_v,
            PostUniforms {
                texel: half_texel,
                direction: [0.0, 1.0],
                radius: 1.0 + BLOOM_RADIUS,
                ..base
            },
        );
        write(
            &self.post.ub_composite,
            PostUniforms {
                strength: BLOOM_STRENGTH,
                ..base
            },
        );
        write(
            &self.post.ub_radial,
            PostUniforms {
                strength: self.radial_strength,
                ..base
            },
        );
        write(
            &self.post.ub_rgb,
            PostUniforms {
                amount: self.rgb_amount,
                angle: self.rgb_angle,
                ..base
            },
        );
        write(&self.post.ub_fxaa, base);
    }
}

fn create_scene_resources(
    device: &wgpu::Device,
    curve: &ClosedCurve,
    scene_state: &SceneAnimationState,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });

    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let pos_layout = wgpu::VertexBufferLayout {
        array_stride: 12,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3],
    };
    let corner_layout = wgpu::VertexBufferLayout {
        array_stride: 8,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
    };
    let model_instance_layout = wgpu::VertexBufferLayout {
        array_stride: 64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![
            1 => Float32x4, 2 => Float32x4, 3 => Float32x4, 4 => Float32x4
        ],
    };
    let plane_instance_layout = wgpu::VertexBufferLayout {
        array_stride: 80,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![
            1 => Float32x4, 2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4
        ],
    };
    let particle_instance_layout = wgpu::VertexBufferLayout {
        array_stride: 12,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![1 => Float32x3],
    };

    let hdr = targets::HDR_FORMAT;
    let line_pipeline = helpers::make_scene_pipeline(
        device,
        "tunnel_lines",
        &layout,
        &shader,
        "vs_line",
        "fs_line",
        &[pos_layout.clone()],
        wgpu::PrimitiveTopology::LineList,
        hdr,
        wgpu::BlendState::ALPHA_BLENDING,
    );
    let shape_pipeline = helpers::make_scene_pipeline(
        device,
        "moving_shapes",
        &layout,
        &shader,
        "vs_shape",
        "fs_shape",
        &[pos_layout, model_instance_layout],
        wgpu::PrimitiveTopology::LineList,
        hdr,
        wgpu::BlendState::ALPHA_BLENDING,
    );
    let plane_pipeline = helpers::make_scene_pipeline(
        device,
        "neon_planes",
        &layout,
        &shader,
        "vs_plane",
        "fs_plane",
        &[corner_layout.clone(), plane_instance_layout],
        wgpu::PrimitiveTopology::TriangleList,
        hdr,
        helpers::ADDITIVE,
    );
    let particle_pipeline = helpers::make_scene_pipeline(
        device,
        "particles",
        &layout,
        &shader,
        "vs_particle",
        "fs_particle",
        &[corner_layout, particle_instance_layout],
        wgpu::PrimitiveTopology::TriangleList,
        hdr,
        helpers::ADDITIVE,
    );

    let grid = crate::core::tunnel::grid_line_vertices(
        curve,
        TUNNEL_RADIUS,
        TUBULAR_SEGMENTS,
        RADIAL_SEGMENTS,
    );
    let grid_raw: Vec<[f32; 3]> = grid.iter().map(|v| v.to_array()).collect();
    let grid_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("grid_vb"),
        contents: bytemuck::cast_slice(&grid_raw),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let box_edges = geometry::box_edge_vertices(geometry::BOX_HALF_EXTENT);
    let box_raw: Vec<[f32; 3]> = box_edges.iter().map(|v| v.to_array()).collect();
    let box_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("box_vb"),
        contents: bytemuck::cast_slice(&box_raw),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let ico_edges = geometry::icosahedron_edge_vertices(geometry::ICOSAHEDRON_RADIUS);
    let ico_raw: Vec<[f32; 3]> = ico_edges.iter().map(|v| v.to_array()).collect();
    let ico_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("ico_vb"),
        contents: bytemuck::cast_slice(&ico_raw),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let quad = geometry::quad_corners();
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("quad_vb"),
        contents: bytemuck::cast_slice(quad.as_slice()),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let shape_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("shape_instances"),
        size: (MOVING_SHAPE_COUNT * 64) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let plane_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("plane_instances"),
        size: (NEON_PLANE_COUNT * std::mem::size_of::<PlaneInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    // particle positions never change; only the billboard basis does
    let particle_raw: Vec<[f32; 3]> = scene_state.particles.iter().map(|v| v.to_array()).collect();
    let particle_instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_instances"),
        contents: bytemuck::cast_slice(&particle_raw),
        usage: wgpu::BufferUsages::VERTEX,
    });

    SceneResources {
        bind_group,
        uniform_buffer,
        line_pipeline,
        shape_pipeline,
        plane_pipeline,
        particle_pipeline,
        grid_vb,
        grid_vertex_count: grid_raw.len() as u32,
        box_vb,
        box_vertex_count: box_raw.len() as u32,
        ico_vb,
        ico_vertex_count: ico_raw.len() as u32,
        quad_vb,
        shape_instance_vb,
        plane_instance_vb,
        particle_instance_vb,
        particle_count: particle_raw.len() as u32,
    }
}

#[allow(clippy::type_complexity)]
fn build_post_bind_groups(
    device: &wgpu::Device,
    post: &post::PostResources,
    targets: &RenderTargets,
    sampler: &wgpu::Sampler,
) -> (
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
) {
    let src = |label, view, uniform| {
        post::make_source_bind_group(device, &post.bgl0, label, view, sampler, uniform)
    };
    (
        src("bg_bright", &targets.hdr_view, &post.ub_bright),
        src("bg_blur_h", &targets.bloom_a_view, &post.ub_blur_h),
        src("bg_blur_v", &targets.bloom_b_view, &post.ub_blur_v),
        src("bg_composite", &targets.hdr_view, &post.ub_composite),
        post::make_aux_bind_group(
            device,
            &post.bgl1,
            "bg_bloom_aux",
            &targets.bloom_a_view,
            sampler,
        ),
        src("bg_radial", &targets.ping_view, &post.ub_radial),
        src("bg_rgb", &targets.pong_view, &post.ub_rgb),
        src("bg_fxaa", &targets.ping_view, &post.ub_fxaa),
    )
}
