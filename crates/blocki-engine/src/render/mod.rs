//! GPU rendering subsystem.
//!
//! - `shader`: named shader sources and per-stage compilation
//! - `program`: linking a vertex + fragment pair and resolving its interface
//! - `ctx`: the device/queue/target bundle handed to renderers each frame
//!
//! Renderers own their pipelines and buffers; nothing here draws by itself.

mod ctx;
pub mod program;
pub mod shader;

#[cfg(test)]
mod fixtures;

pub use ctx::{RenderCtx, RenderTarget};
pub use program::{ShaderProgram, UniformSlot};
pub use shader::{compile, CompiledShader, ShaderDocument, ShaderKind, ShaderSource};
