//! Linking a vertex + fragment pair into one program.
//!
//! Linking checks that every varying the fragment stage reads is written by the
//! vertex stage, then records the program's interface by name: vertex
//! attributes map to `@location`s, uniforms to `@group`/`@binding` slots.
//! Renderers look names up here instead of hard-coding slot numbers.

use std::borrow::Cow;
use std::collections::HashMap;

use naga::{AddressSpace, Binding, Handle, Module, Type, TypeInner};

use crate::error::SetupError;

use super::shader::{CompiledShader, ShaderKind};

/// Bind group slot of a uniform.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformSlot {
    pub group: u32,
    pub binding: u32,
}

/// A linked shader program and its resolved interface.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    vertex: CompiledShader,
    fragment: CompiledShader,
    attributes: HashMap<String, u32>,
    uniforms: HashMap<String, UniformSlot>,
}

impl ShaderProgram {
    /// Links `vertex` and `fragment`.
    ///
    /// Fails with [`SetupError::ProgramLink`] if the stages are swapped, if a
    /// fragment input has no matching vertex output, or if both stages declare
    /// the same uniform name at different slots.
    pub fn link(vertex: CompiledShader, fragment: CompiledShader) -> Result<Self, SetupError> {
        if vertex.kind() != ShaderKind::Vertex || fragment.kind() != ShaderKind::Fragment {
            return Err(SetupError::link(format!(
                "expected vertex + fragment, got {} + {}",
                vertex.kind().label(),
                fragment.kind().label()
            )));
        }

        let vs = vertex.entry();
        let outputs: Vec<u32> = vs
            .function
            .result
            .as_ref()
            .map(|r| io_locations(vertex.module(), None, r.ty, r.binding.as_ref()))
            .unwrap_or_default()
            .into_iter()
            .map(|(_, loc)| loc)
            .collect();

        for arg in &fragment.entry().function.arguments {
            let inputs = io_locations(fragment.module(), arg.name.as_deref(), arg.ty, arg.binding.as_ref());
            for (name, loc) in inputs {
                if !outputs.contains(&loc) {
                    return Err(SetupError::link(format!(
                        "fragment input `{}` at @location({loc}) is not written by `{}`",
                        name.as_deref().unwrap_or("?"),
                        vertex.id()
                    )));
                }
            }
        }

        let mut attributes = HashMap::new();
        for arg in &vs.function.arguments {
            let inputs = io_locations(vertex.module(), arg.name.as_deref(), arg.ty, arg.binding.as_ref());
            for (name, loc) in inputs {
                if let Some(name) = name {
                    attributes.insert(name, loc);
                }
            }
        }

        let mut uniforms = HashMap::new();
        for module in [vertex.module(), fragment.module()] {
            for (name, slot) in uniform_slots(module) {
                if let Some(existing) = uniforms.get(&name).copied() {
                    if existing != slot {
                        return Err(SetupError::link(format!(
                            "uniform `{name}` declared at {existing:?} and {slot:?}"
                        )));
                    }
                    continue;
                }
                uniforms.insert(name, slot);
            }
        }

        log::debug!(
            "linked `{}` + `{}`: {} attribute(s), {} uniform(s)",
            vertex.id(),
            fragment.id(),
            attributes.len(),
            uniforms.len()
        );

        Ok(Self { vertex, fragment, attributes, uniforms })
    }

    pub fn vertex(&self) -> &CompiledShader {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledShader {
        &self.fragment
    }

    /// Location of the vertex attribute called `name`.
    pub fn attrib_location(&self, name: &str) -> Result<u32, SetupError> {
        self.attributes
            .get(name)
            .copied()
            .ok_or_else(|| SetupError::link(format!("no active attribute `{name}`")))
    }

    /// Slot of the uniform called `name`.
    pub fn uniform_slot(&self, name: &str) -> Result<UniformSlot, SetupError> {
        self.uniforms
            .get(name)
            .copied()
            .ok_or_else(|| SetupError::link(format!("no active uniform `{name}`")))
    }

    /// Creates the device-side modules for both stages, vertex first.
    pub fn create_modules(&self, device: &wgpu::Device) -> (wgpu::ShaderModule, wgpu::ShaderModule) {
        let create = |shader: &CompiledShader| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(shader.id()),
                source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(shader.source())),
            })
        };
        (create(&self.vertex), create(&self.fragment))
    }
}

/// `@location`s carried by one entry point argument or result, with names.
///
/// Struct-typed values contribute one entry per located member; built-ins are
/// skipped.
fn io_locations(
    module: &Module,
    name: Option<&str>,
    ty: Handle<Type>,
    binding: Option<&Binding>,
) -> Vec<(Option<String>, u32)> {
    if let Some(Binding::Location { location, .. }) = binding {
        return vec![(name.map(str::to_owned), *location)];
    }

    match &module.types[ty].inner {
        TypeInner::Struct { members, .. } => members
            .iter()
            .filter_map(|m| match &m.binding {
                Some(Binding::Location { location, .. }) => Some((m.name.clone(), *location)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn uniform_slots(module: &Module) -> impl Iterator<Item = (String, UniformSlot)> + '_ {
    module.global_variables.iter().filter_map(|(_, var)| {
        if var.space != AddressSpace::Uniform {
            return None;
        }
        let name = var.name.clone()?;
        let rb = var.binding.as_ref()?;
        Some((name, UniformSlot { group: rb.group, binding: rb.binding }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;
    use crate::render::shader::{compile, ShaderDocument};

    fn document() -> ShaderDocument {
        ShaderDocument::new()
            .with("vs", ShaderKind::Vertex, fixtures::VERTEX)
            .with("fs", ShaderKind::Fragment, fixtures::FRAGMENT)
            .with("fs-unmatched", ShaderKind::Fragment, fixtures::FRAGMENT_UNMATCHED)
    }

    fn link(vs: &str, fs: &str) -> Result<ShaderProgram, SetupError> {
        let doc = document();
        let vertex = compile(&doc, vs, ShaderKind::Vertex)?;
        let fragment = compile(&doc, fs, ShaderKind::Fragment)?;
        ShaderProgram::link(vertex, fragment)
    }

    #[test]
    fn resolves_attributes_and_uniforms() {
        let program = link("vs", "fs").expect("links");

        assert_eq!(program.attrib_location("aVertexPosition").unwrap(), 0);
        assert_eq!(program.attrib_location("aVertexColor").unwrap(), 1);

        assert_eq!(program.uniform_slot("uMVMatrix").unwrap(), UniformSlot { group: 0, binding: 0 });
        assert_eq!(program.uniform_slot("uPMatrix").unwrap(), UniformSlot { group: 0, binding: 1 });

        assert_eq!(program.vertex().entry_point(), "vs_main");
        assert_eq!(program.fragment().entry_point(), "fs_main");
    }

    #[test]
    fn unknown_names_fail_lookup() {
        let program = link("vs", "fs").expect("links");
        assert!(matches!(
            program.attrib_location("aTextureCoord"),
            Err(SetupError::ProgramLink { .. })
        ));
        assert!(matches!(
            program.uniform_slot("uNMatrix"),
            Err(SetupError::ProgramLink { .. })
        ));
    }

    #[test]
    fn unmatched_varying_fails_to_link() {
        let err = link("vs", "fs-unmatched").unwrap_err();
        let SetupError::ProgramLink { message } = &err else {
            panic!("expected link error, got {err:?}");
        };
        assert!(message.contains("@location(3)"), "{message}");
    }

    #[test]
    fn swapped_stages_fail_to_link() {
        let doc = document();
        let vertex = compile(&doc, "vs", ShaderKind::Vertex).unwrap();
        let fragment = compile(&doc, "fs", ShaderKind::Fragment).unwrap();

        let err = ShaderProgram::link(fragment, vertex).unwrap_err();
        assert!(matches!(err, SetupError::ProgramLink { .. }));
    }
}
