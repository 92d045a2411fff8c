use bytemuck::{Pod, Zeroable};
use cgmath::{Matrix4, Point3, Vector3};
use wgpu::util::DeviceExt;

use ember_engine::device::{Gpu, GpuFrame};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Draws unit cubes, one instance per body part, with depth testing.
pub struct FigureRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_ubo: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    cube_vbo: wgpu::Buffer,
    cube_ibo: wgpu::Buffer,
    index_count: u32,

    instance_vbo: wgpu::Buffer,
    instance_capacity: usize,

    depth: DepthTarget,
}

impl FigureRenderer {
    pub fn new(gpu: &Gpu<'_>) -> Self {
        let device = gpu.device();
        let sample_count = gpu.sample_count();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ember figure shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/figure.wgsl").into()),
        });

        let camera_size = std::num::NonZeroU64::new(std::mem::size_of::<CameraUniform>() as u64);
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ember figure camera bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: camera_size,
                },
                count: None,
            }],
        });

        let camera_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ember figure camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ember figure camera bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ember figure pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ember figure pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout(), InstanceRaw::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.surface_format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview_mask: None,
            cache: None,
        });

        let (vertices, indices) = cube_mesh();
        let cube_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ember cube vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let cube_ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ember cube ibo"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_capacity = 16;
        let instance_vbo = create_instance_buffer(device, instance_capacity);

        let size = gpu.size();
        let depth = DepthTarget::new(device, size.width, size.height, sample_count);

        Self {
            pipeline,
            camera_ubo,
            camera_bind_group,
            cube_vbo,
            cube_ibo,
            index_count: indices.len() as u32,
            instance_vbo,
            instance_capacity,
            depth,
        }
    }

    /// Recreates the depth buffer for a new drawable size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth.matches(width, height) {
            return;
        }
        self.depth = DepthTarget::new(device, width, height, self.depth.sample_count);
    }

    pub fn render(
        &mut self,
        gpu: &Gpu<'_>,
        frame: &mut GpuFrame,
        camera: &CameraUniform,
        instances: &[InstanceRaw],
        clear: wgpu::Color,
    ) {
        // The surface can be reconfigured before the resize callback runs.
        self.resize(gpu.device(), frame.target.width, frame.target.height);
        self.ensure_instance_capacity(gpu.device(), instances.len());

        let queue = gpu.queue();
        queue.write_buffer(&self.camera_ubo, 0, bytemuck::bytes_of(camera));
        queue.write_buffer(&self.instance_vbo, 0, bytemuck::cast_slice(instances));

        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ember figure pass"),
            color_attachments: &[Some(frame.target.color_attachment(wgpu::LoadOp::Clear(clear)))],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if instances.is_empty() {
            return;
        }

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.camera_bind_group, &[]);
        rpass.set_vertex_buffer(0, self.cube_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vbo.slice(..));
        rpass.set_index_buffer(self.cube_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..instances.len() as u32);
    }

    fn ensure_instance_capacity(&mut self, device: &wgpu::Device, required: usize) {
        if required <= self.instance_capacity {
            return;
        }
        let new_cap = required.next_power_of_two();
        self.instance_vbo = create_instance_buffer(device, new_cap);
        self.instance_capacity = new_cap;
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("ember figure instance vbo"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

// ── depth ──────────────────────────────────────────────────────────────────

struct DepthTarget {
    view: wgpu::TextureView,
    width: u32,
    height: u32,
    sample_count: u32,
}

impl DepthTarget {
    /// Sample count must match the color target the pass renders into.
    fn new(device: &wgpu::Device, width: u32, height: u32, sample_count: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("ember depth"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        Self {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
            width,
            height,
            sample_count,
        }
    }

    fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width.max(1) && self.height == height.max(1)
    }
}

// ── GPU types ──────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    light_dir: [f32; 4],
}

impl CameraUniform {
    pub fn new(view_proj: Matrix4<f32>, eye: Point3<f32>, light_dir: Vector3<f32>) -> Self {
        Self {
            view_proj: view_proj.into(),
            eye: [eye.x, eye.y, eye.z, 1.0],
            light_dir: [light_dir.x, light_dir.y, light_dir.z, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Per-instance data (80 bytes): model matrix columns at locations 2..=5,
/// color at 6.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

impl InstanceRaw {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4
    ];

    pub fn new(model: Matrix4<f32>, color: [f32; 4]) -> Self {
        Self {
            model: model.into(),
            color,
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Unit cube centered on the origin: 4 vertices per face so each face gets
/// a flat normal, counter-clockwise when seen from outside.
pub fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    // (normal, u, v) with u x v = normal.
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (n, u, v) in faces {
        let base = vertices.len() as u16;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let position = std::array::from_fn(|i| n[i] * 0.5 + u[i] * su + v[i] * sv);
            vertices.push(Vertex {
                position,
                normal: n,
            });
        }
        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}
