//! Blocki logo model.
//!
//! GPU-free description of the animated logo: the static mesh and colors, the
//! frame-driven animation state and the per-frame transforms. Renderers own
//! the device buffers; this crate only produces the data that goes into them.

pub mod animation;
pub mod geometry;
pub mod transform;

pub use animation::AnimationState;
pub use geometry::{Position, Rgba, VERTEX_COUNT};
pub use transform::Transforms;
