//! Coordinate types shared by the device layer and renderers.
//!
//! Mesh geometry lives in clip space; the only pixel-space quantity the
//! renderers need is the viewport.

mod viewport;

pub use viewport::Viewport;
