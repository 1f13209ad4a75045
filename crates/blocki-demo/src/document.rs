//! The page the logo is embedded in: the canvas id and the shader sources,
//! keyed by the ids the renderer looks them up with.

use blocki_engine::render::{ShaderDocument, ShaderKind};

/// Id of the drawing surface; used as the window title.
pub const CANVAS_ID: &str = "myGLCanvas";

/// Id of the vertex shader source.
pub const VERTEX_SHADER_ID: &str = "shader-vs";

/// Id of the fragment shader source.
pub const FRAGMENT_SHADER_ID: &str = "shader-fs";

/// Builds the document with both embedded shaders.
pub fn shader_document() -> ShaderDocument {
    ShaderDocument::new()
        .with(VERTEX_SHADER_ID, ShaderKind::Vertex, include_str!("shaders/logo.vert.wgsl"))
        .with(FRAGMENT_SHADER_ID, ShaderKind::Fragment, include_str!("shaders/logo.frag.wgsl"))
}
