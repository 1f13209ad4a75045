//! WGSL snippets shared by the shader/program tests.

pub(crate) const VERTEX: &str = r#"
struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> uMVMatrix: mat4x4<f32>;
@group(0) @binding(1) var<uniform> uPMatrix: mat4x4<f32>;

@vertex
fn vs_main(
    @location(0) aVertexPosition: vec3<f32>,
    @location(1) aVertexColor: vec4<f32>,
) -> VertexOutput {
    var out: VertexOutput;
    out.position = uPMatrix * uMVMatrix * vec4<f32>(aVertexPosition, 1.0);
    out.color = aVertexColor;
    return out;
}
"#;

pub(crate) const FRAGMENT: &str = r#"
@fragment
fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
    return color;
}
"#;

/// Reads a varying the vertex stage never writes.
pub(crate) const FRAGMENT_UNMATCHED: &str = r#"
@fragment
fn fs_main(@location(3) color: vec4<f32>) -> @location(0) vec4<f32> {
    return color;
}
"#;

pub(crate) const BROKEN: &str = r#"
@vertex
fn vs_main() -> @builtin(position) vec4<f32> {
    return vec4<f32>(0.0, 0.0, 0.0)
}
"#;
