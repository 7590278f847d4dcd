use crate::mesh::{GpuMesh, GpuSphere, vertex_attributes};
use crate::program::{ShaderProgram, build_program};
use crate::scene::{StartupError, load_scene_images};
use crate::shaders;
use crate::texture::{GpuTexture, texture_bind_group_layout};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use roomview_assets::{BuiltinMesh, SphereMesh, VertexLayout};
use roomview_common::ViewerConfig;
use roomview_render::{Frame, MeshId, ProgramKind, TextureSlot};
use std::collections::{BTreeMap, HashMap};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Transforms {
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl Transforms {
    fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }
}

/// Uniform buffer and bind group for one draw of a frame.
struct TransformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// A linked program with its GPU shader modules and pipeline layout.
struct GpuProgram {
    program: ShaderProgram,
    vertex_module: wgpu::ShaderModule,
    fragment_module: wgpu::ShaderModule,
    layout: wgpu::PipelineLayout,
}

impl GpuProgram {
    fn new(device: &wgpu::Device, program: ShaderProgram, bind_group_layouts: &[&wgpu::BindGroupLayout]) -> Self {
        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{}_vertex", program.label)),
            source: wgpu::ShaderSource::Wgsl(program.vertex.source.as_str().into()),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{}_fragment", program.label)),
            source: wgpu::ShaderSource::Wgsl(program.fragment.source.as_str().into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&program.label),
            bind_group_layouts,
            push_constant_ranges: &[],
        });
        Self {
            program,
            vertex_module,
            fragment_module,
            layout,
        }
    }

    fn create_pipeline(
        &self,
        device: &wgpu::Device,
        mesh_layout: &VertexLayout,
        surface_format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let attributes = vertex_attributes(mesh_layout);
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&self.program.label),
            layout: Some(&self.layout),
            vertex: wgpu::VertexState {
                module: &self.vertex_module,
                entry_point: Some(self.program.vertex.entry_point.as_str()),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: mesh_layout.stride(),
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &attributes,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &self.fragment_module,
                entry_point: Some(self.program.fragment.entry_point.as_str()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            // The room is viewed from inside; no face culling.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        })
    }
}

/// wgpu renderer for the room scene.
///
/// Owns every GPU resource of the scene. Fields are declared in teardown
/// order: meshes, then textures, then programs.
pub struct WgpuRenderer {
    meshes: BTreeMap<BuiltinMesh, GpuMesh>,
    sphere: GpuSphere,
    textures: BTreeMap<TextureSlot, GpuTexture>,
    programs: BTreeMap<ProgramKind, GpuProgram>,
    pipelines: HashMap<(ProgramKind, VertexLayout), wgpu::RenderPipeline>,
    transform_slots: Vec<TransformSlot>,
    transforms_layout: wgpu::BindGroupLayout,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
    viewport: (u32, u32),
}

impl WgpuRenderer {
    /// Upload meshes, build both programs, then load the four textures in
    /// order. The first failure is returned; nothing is drawn after it.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        config: &ViewerConfig,
    ) -> Result<Self, StartupError> {
        let mut meshes = BTreeMap::new();
        for mesh in BuiltinMesh::ALL {
            let data = mesh.build().map_err(StartupError::Mesh)?;
            meshes.insert(mesh, GpuMesh::upload(device, &data));
        }
        let sphere = SphereMesh::new(config.sphere.radius, config.sphere.sectors, config.sphere.stacks);
        let sphere = GpuSphere::upload(device, &sphere);

        let transforms_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("transforms_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let texture_layout = texture_bind_group_layout(device);

        let lamp = build_program(ProgramKind::Lamp.name(), shaders::LAMP_VERTEX, shaders::LAMP_FRAGMENT)?;
        let textured = build_program(
            ProgramKind::Textured.name(),
            shaders::TEXTURED_VERTEX,
            shaders::TEXTURED_FRAGMENT,
        )?;
        let mut programs = BTreeMap::new();
        programs.insert(ProgramKind::Lamp, GpuProgram::new(device, lamp, &[&transforms_layout]));
        programs.insert(
            ProgramKind::Textured,
            GpuProgram::new(device, textured, &[&transforms_layout, &texture_layout]),
        );

        let textures: BTreeMap<TextureSlot, GpuTexture> = load_scene_images(config)?
            .into_iter()
            .map(|(slot, image)| (slot, GpuTexture::upload(device, queue, &texture_layout, &image)))
            .collect();

        tracing::info!(
            meshes = meshes.len() + 1,
            programs = programs.len(),
            textures = textures.len(),
            "scene resources ready"
        );

        Ok(Self {
            meshes,
            sphere,
            textures,
            programs,
            pipelines: HashMap::new(),
            transform_slots: Vec::new(),
            transforms_layout,
            depth_texture: Self::create_depth_texture(device, width, height),
            surface_format,
            viewport: (width.max(1), height.max(1)),
        })
    }

    /// Match the depth buffer and viewport to a new framebuffer size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
        self.viewport = (width.max(1), height.max(1));
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn texture(&self, slot: TextureSlot) -> Option<&GpuTexture> {
        self.textures.get(&slot)
    }

    /// Clear, then execute the frame's draws in order.
    pub fn render(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, view: &wgpu::TextureView, frame: &Frame) {
        self.prepare(device, frame);

        for (slot, draw) in self.transform_slots.iter().zip(&frame.draws) {
            let transforms = Transforms::new(draw.model, frame.state.view, frame.state.projection);
            queue.write_buffer(&slot.buffer, 0, bytemuck::bytes_of(&transforms));
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene_encoder"),
        });

        {
            let [r, g, b, a] = frame.clear_color;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });
            let (width, height) = self.viewport;
            pass.set_viewport(0.0, 0.0, width as f32, height as f32, 0.0, 1.0);

            for (slot, draw) in self.transform_slots.iter().zip(&frame.draws) {
                let layout = self.mesh_layout(draw.mesh);
                let Some(pipeline) = self.pipelines.get(&(draw.program, layout)) else {
                    tracing::warn!(
                        program = draw.program.name(),
                        mesh = draw.mesh.name(),
                        "no pipeline for draw, skipped"
                    );
                    continue;
                };
                pass.set_pipeline(pipeline);
                pass.set_bind_group(0, &slot.bind_group, &[]);

                if draw.program == ProgramKind::Textured {
                    let Some(texture) = draw.texture.and_then(|t| self.textures.get(&t)) else {
                        tracing::warn!(mesh = draw.mesh.name(), "textured draw without a texture, skipped");
                        continue;
                    };
                    pass.set_bind_group(1, texture.bind_group(), &[]);
                }

                match draw.mesh {
                    MeshId::Builtin(mesh) => {
                        match self.meshes.get(&mesh) {
                            Some(gpu_mesh) => gpu_mesh.draw(&mut pass),
                            None => tracing::warn!(mesh = mesh.name(), "mesh not uploaded, draw skipped"),
                        }
                    }
                    MeshId::Sphere => self.sphere.draw(&mut pass),
                }
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    /// Release meshes, then textures, then programs.
    pub fn destroy(self) {
        let Self {
            meshes,
            sphere,
            textures,
            programs,
            pipelines,
            ..
        } = self;
        for mesh in meshes.into_values() {
            mesh.destroy();
        }
        sphere.destroy();
        for texture in textures.into_values() {
            texture.destroy();
        }
        drop(pipelines);
        drop(programs);
        tracing::info!("scene resources released");
    }

    fn mesh_layout(&self, mesh: MeshId) -> VertexLayout {
        match mesh {
            MeshId::Builtin(mesh) => mesh.layout(),
            MeshId::Sphere => SphereMesh::LAYOUT,
        }
    }

    /// Make sure every draw has a uniform slot and a pipeline for its
    /// program and vertex layout.
    fn prepare(&mut self, device: &wgpu::Device, frame: &Frame) {
        while self.transform_slots.len() < frame.draws.len() {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("transforms"),
                size: std::mem::size_of::<Transforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("transforms"),
                layout: &self.transforms_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            self.transform_slots.push(TransformSlot { buffer, bind_group });
        }

        for draw in &frame.draws {
            let layout = self.mesh_layout(draw.mesh);
            let key = (draw.program, layout);
            if self.pipelines.contains_key(&key) {
                continue;
            }
            let Some(program) = self.programs.get(&draw.program) else {
                tracing::warn!(program = draw.program.name(), "program not built, no pipeline created");
                continue;
            };
            tracing::debug!(program = draw.program.name(), mesh = draw.mesh.name(), "creating pipeline");
            let pipeline = program.create_pipeline(device, &layout, self.surface_format);
            self.pipelines.insert(key, pipeline);
        }
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}
