//! Blocki engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the logo demo:
//! window loop, context bootstrap, shader program setup and frame timing.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod error;
