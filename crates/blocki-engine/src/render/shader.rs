//! Named shader sources and per-stage compilation.
//!
//! A [`ShaderDocument`] plays the role of the page that embeds the shaders:
//! sources are looked up by id and carry the stage they were tagged with.
//! Compilation parses and validates WGSL with `naga` so failures surface at
//! startup with a readable report instead of as a device error later.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::SetupError;

/// Pipeline stage a source is written for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub fn label(self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        }
    }

    fn stage(self) -> naga::ShaderStage {
        match self {
            ShaderKind::Vertex => naga::ShaderStage::Vertex,
            ShaderKind::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

/// WGSL source tagged with its stage.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub kind: ShaderKind,
    pub code: Cow<'static, str>,
}

/// Id-keyed collection of shader sources.
#[derive(Debug, Clone, Default)]
pub struct ShaderDocument {
    sources: HashMap<String, ShaderSource>,
}

impl ShaderDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(
        mut self,
        id: impl Into<String>,
        kind: ShaderKind,
        code: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(id, kind, code);
        self
    }

    /// Adds or replaces the source stored under `id`.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        kind: ShaderKind,
        code: impl Into<Cow<'static, str>>,
    ) {
        self.sources.insert(id.into(), ShaderSource { kind, code: code.into() });
    }

    pub fn get(&self, id: &str) -> Result<&ShaderSource, SetupError> {
        self.sources
            .get(id)
            .ok_or_else(|| SetupError::ShaderSourceMissing { id: id.to_string() })
    }
}

/// A validated single-stage shader.
#[derive(Debug, Clone)]
pub struct CompiledShader {
    id: String,
    kind: ShaderKind,
    source: String,
    module: naga::Module,
    entry_index: usize,
}

impl CompiledShader {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    /// WGSL text the module was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn module(&self) -> &naga::Module {
        &self.module
    }

    /// The entry point for this shader's stage.
    pub fn entry(&self) -> &naga::EntryPoint {
        &self.module.entry_points[self.entry_index]
    }

    pub fn entry_point(&self) -> &str {
        &self.entry().name
    }
}

/// Looks up `id` in `document` and compiles it as a `kind` shader.
///
/// Fails with [`SetupError::ShaderSourceMissing`] if the id is absent and with
/// [`SetupError::ShaderCompile`] if the source is tagged for another stage,
/// does not parse, does not validate or has no entry point for `kind`.
pub fn compile(
    document: &ShaderDocument,
    id: &str,
    kind: ShaderKind,
) -> Result<CompiledShader, SetupError> {
    let src = document.get(id)?;
    if src.kind != kind {
        return Err(SetupError::compile(
            id,
            format!("expected a {} shader, found a {} shader", kind.label(), src.kind.label()),
        ));
    }

    let code = src.code.as_ref();
    let module = naga::front::wgsl::parse_str(code)
        .map_err(|e| SetupError::compile(id, e.emit_to_string(code)))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| SetupError::compile(id, e.emit_to_string(code)))?;

    let stage = kind.stage();
    let entry_index = module
        .entry_points
        .iter()
        .position(|ep| ep.stage == stage)
        .ok_or_else(|| SetupError::compile(id, format!("no @{} entry point", kind.label())))?;

    log::debug!(
        "compiled {} shader `{id}` (entry point `{}`)",
        kind.label(),
        module.entry_points[entry_index].name
    );

    Ok(CompiledShader {
        id: id.to_string(),
        kind,
        source: code.to_string(),
        module,
        entry_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    fn document() -> ShaderDocument {
        ShaderDocument::new()
            .with("vs", ShaderKind::Vertex, fixtures::VERTEX)
            .with("fs", ShaderKind::Fragment, fixtures::FRAGMENT)
            .with("broken", ShaderKind::Vertex, fixtures::BROKEN)
            .with("fs-as-vs", ShaderKind::Vertex, fixtures::FRAGMENT)
    }

    #[test]
    fn compiles_both_stages() {
        let doc = document();

        let vs = compile(&doc, "vs", ShaderKind::Vertex).expect("vertex compiles");
        assert_eq!(vs.entry_point(), "vs_main");
        assert_eq!(vs.kind(), ShaderKind::Vertex);
        assert_eq!(vs.id(), "vs");

        let fs = compile(&doc, "fs", ShaderKind::Fragment).expect("fragment compiles");
        assert_eq!(fs.entry_point(), "fs_main");
        assert_eq!(fs.entry().stage, naga::ShaderStage::Fragment);
    }

    #[test]
    fn missing_id_is_reported() {
        let err = compile(&document(), "shader-vs", ShaderKind::Vertex).unwrap_err();
        assert!(matches!(err, SetupError::ShaderSourceMissing { ref id } if id == "shader-vs"));
    }

    #[test]
    fn syntax_error_is_a_compile_error() {
        let err = compile(&document(), "broken", ShaderKind::Vertex).unwrap_err();
        assert!(matches!(err, SetupError::ShaderCompile { ref id, .. } if id == "broken"));
    }

    #[test]
    fn wrong_tag_is_a_compile_error() {
        let err = compile(&document(), "vs", ShaderKind::Fragment).unwrap_err();
        let SetupError::ShaderCompile { message, .. } = &err else {
            panic!("expected compile error, got {err:?}");
        };
        assert!(message.contains("expected a fragment shader"), "{message}");
    }

    #[test]
    fn missing_entry_point_is_a_compile_error() {
        let err = compile(&document(), "fs-as-vs", ShaderKind::Vertex).unwrap_err();
        let SetupError::ShaderCompile { message, .. } = &err else {
            panic!("expected compile error, got {err:?}");
        };
        assert_eq!(message, "no @vertex entry point");
    }

    #[test]
    fn insert_replaces_existing_source() {
        let mut doc = document();
        assert!(compile(&doc, "broken", ShaderKind::Vertex).is_err());
        doc.insert("broken", ShaderKind::Vertex, fixtures::VERTEX);
        assert!(compile(&doc, "broken", ShaderKind::Vertex).is_ok());
    }
}
