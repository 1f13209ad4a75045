//! GPU side of the logo: program setup, device buffers and the draw call.

use std::num::NonZeroU64;

use wgpu::util::DeviceExt;

use blocki_engine::error::SetupError;
use blocki_engine::render::{
    compile, RenderCtx, RenderTarget, ShaderDocument, ShaderKind, ShaderProgram, UniformSlot,
};
use blocki_logo::geometry::{self, Position, VERTEX_COUNT};
use blocki_logo::Transforms;

use crate::document::{FRAGMENT_SHADER_ID, VERTEX_SHADER_ID};

pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
pub const COLOR_ATTRIBUTE: &str = "aVertexColor";
pub const MODELVIEW_UNIFORM: &str = "uMVMatrix";
pub const PROJECTION_UNIFORM: &str = "uPMatrix";

/// Bind group every uniform must live in.
const UNIFORM_GROUP: u32 = 0;

const MAT4_SIZE: u64 = std::mem::size_of::<[f32; 16]>() as u64;

/// The program interface the renderer needs, resolved by name.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LogoBindings {
    pub position: u32,
    pub color: u32,
    pub modelview: UniformSlot,
    pub projection: UniformSlot,
}

/// Compiles and links the document's shader pair, then resolves the
/// attributes and uniforms the logo renderer binds.
pub fn setup_shaders(document: &ShaderDocument) -> Result<(ShaderProgram, LogoBindings), SetupError> {
    let vertex = compile(document, VERTEX_SHADER_ID, ShaderKind::Vertex)?;
    let fragment = compile(document, FRAGMENT_SHADER_ID, ShaderKind::Fragment)?;
    let program = ShaderProgram::link(vertex, fragment)?;

    let bindings = LogoBindings {
        position: program.attrib_location(POSITION_ATTRIBUTE)?,
        color: program.attrib_location(COLOR_ATTRIBUTE)?,
        modelview: program.uniform_slot(MODELVIEW_UNIFORM)?,
        projection: program.uniform_slot(PROJECTION_UNIFORM)?,
    };

    for (name, slot) in [(MODELVIEW_UNIFORM, bindings.modelview), (PROJECTION_UNIFORM, bindings.projection)] {
        if slot.group != UNIFORM_GROUP {
            return Err(SetupError::ProgramLink {
                message: format!("uniform `{name}` must be in @group({UNIFORM_GROUP}), found {slot:?}"),
            });
        }
    }

    Ok((program, bindings))
}

/// Logo renderer.
///
/// Positions live in a buffer rewritten every frame; colors are uploaded once.
/// Matrices go through two small uniform buffers, one per uniform.
pub struct LogoRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,

    modelview_ubo: wgpu::Buffer,
    projection_ubo: wgpu::Buffer,

    position_vbo: wgpu::Buffer,
    color_vbo: wgpu::Buffer,
}

impl LogoRenderer {
    pub fn new(
        ctx: &RenderCtx<'_>,
        program: &ShaderProgram,
        bindings: LogoBindings,
        initial: &[Position; VERTEX_COUNT],
    ) -> Self {
        let (vs_module, fs_module) = program.create_modules(ctx.device);

        let mat4_binding_size = NonZeroU64::new(MAT4_SIZE);
        let uniform_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: mat4_binding_size,
            },
            count: None,
        };

        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("blocki logo bgl"),
                entries: &[
                    uniform_entry(bindings.modelview.binding),
                    uniform_entry(bindings.projection.binding),
                ],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("blocki logo pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let position_attrs = [wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: bindings.position,
        }];
        let color_attrs = [wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 0,
            shader_location: bindings.color,
        }];
        let vertex_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Position>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &position_attrs,
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<geometry::Rgba>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &color_attrs,
            },
        ];

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("blocki logo pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(program.vertex().entry_point()),
                compilation_options: Default::default(),
                buffers: &vertex_buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(program.fragment().entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: ctx.depth_format.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        let uniform_buffer = |label: &'static str| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: MAT4_SIZE,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let modelview_ubo = uniform_buffer("blocki modelview ubo");
        let projection_ubo = uniform_buffer("blocki projection ubo");

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("blocki logo bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: bindings.modelview.binding,
                    resource: modelview_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: bindings.projection.binding,
                    resource: projection_ubo.as_entire_binding(),
                },
            ],
        });

        // Rewritten every frame.
        let position_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blocki logo position vbo"),
            contents: bytemuck::cast_slice(&initial[..]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        // Uploaded once.
        let colors = geometry::colors();
        let color_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blocki logo color vbo"),
            contents: bytemuck::cast_slice(&colors[..]),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("logo renderer ready: {VERTEX_COUNT} vertices, {bindings:?}");

        Self {
            pipeline,
            bind_group,
            modelview_ubo,
            projection_ubo,
            position_vbo,
            color_vbo,
        }
    }

    /// Replaces the whole position buffer.
    ///
    /// The write lands before the next submission, so call it after the frame
    /// that should still see the old positions has been submitted.
    pub fn upload_positions(&self, queue: &wgpu::Queue, positions: &[Position; VERTEX_COUNT]) {
        queue.write_buffer(&self.position_vbo, 0, bytemuck::cast_slice(&positions[..]));
    }

    /// Uploads `transforms` and draws the mesh as a triangle list.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, transforms: &Transforms) {
        ctx.queue
            .write_buffer(&self.modelview_ubo, 0, bytemuck::cast_slice(&transforms.modelview_cols()));
        ctx.queue
            .write_buffer(&self.projection_ubo, 0, bytemuck::cast_slice(&transforms.projection_cols()));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("blocki logo pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: target.depth_view.map(|view| {
                wgpu::RenderPassDepthStencilAttachment {
                    view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let vp = ctx.viewport;
        if vp.is_valid() {
            rpass.set_viewport(0.0, 0.0, vp.width as f32, vp.height as f32, 0.0, 1.0);
        }

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(UNIFORM_GROUP, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.position_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.color_vbo.slice(..));
        rpass.draw(0..VERTEX_COUNT as u32, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::shader_document;

    #[test]
    fn embedded_shaders_resolve_the_logo_interface() {
        let (program, bindings) = setup_shaders(&shader_document()).expect("embedded shaders link");

        assert_eq!(bindings.position, 0);
        assert_eq!(bindings.color, 1);
        assert_eq!(bindings.modelview, UniformSlot { group: 0, binding: 0 });
        assert_eq!(bindings.projection, UniformSlot { group: 0, binding: 1 });
        assert_eq!(program.vertex().id(), VERTEX_SHADER_ID);
        assert_eq!(program.fragment().id(), FRAGMENT_SHADER_ID);
    }

    #[test]
    fn missing_vertex_source_is_reported() {
        let doc = ShaderDocument::new().with(
            FRAGMENT_SHADER_ID,
            ShaderKind::Fragment,
            include_str!("shaders/logo.frag.wgsl"),
        );
        let err = setup_shaders(&doc).unwrap_err();
        assert!(matches!(err, SetupError::ShaderSourceMissing { ref id } if id == VERTEX_SHADER_ID));
    }

    #[test]
    fn swapped_tags_fail_to_compile() {
        let doc = ShaderDocument::new()
            .with(VERTEX_SHADER_ID, ShaderKind::Fragment, include_str!("shaders/logo.frag.wgsl"))
            .with(FRAGMENT_SHADER_ID, ShaderKind::Vertex, include_str!("shaders/logo.vert.wgsl"));
        let err = setup_shaders(&doc).unwrap_err();
        assert!(matches!(err, SetupError::ShaderCompile { .. }));
    }

    #[test]
    fn renamed_attribute_fails_to_resolve() {
        let renamed = include_str!("shaders/logo.vert.wgsl").replace("aVertexColor", "aColor");
        let doc = shader_document().with(VERTEX_SHADER_ID, ShaderKind::Vertex, renamed);
        let err = setup_shaders(&doc).unwrap_err();
        let SetupError::ProgramLink { message } = &err else {
            panic!("expected link error, got {err:?}");
        };
        assert!(message.contains(COLOR_ATTRIBUTE), "{message}");
    }

    #[test]
    fn uniform_outside_group_zero_is_rejected() {
        let moved = include_str!("shaders/logo.vert.wgsl")
            .replace("@group(0) @binding(1)", "@group(1) @binding(0)");
        let doc = shader_document().with(VERTEX_SHADER_ID, ShaderKind::Vertex, moved);
        let err = setup_shaders(&doc).unwrap_err();
        assert!(matches!(err, SetupError::ProgramLink { .. }));
    }
}
