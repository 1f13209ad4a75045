//! Paint model shared between the runtime and renderers.

pub mod color;

pub use color::Color;
