//! GPU device + surface management.
//!
//! This module is responsible for:
//! - acquiring the wgpu Instance/Adapter/Device/Queue, with a backend fallback
//! - creating & configuring the Surface (swapchain) and its depth attachment
//! - acquiring frames and providing encoders/views for rendering

mod depth;
mod gpu;
mod init;
mod surface;

pub use depth::DepthTarget;
pub use gpu::{Gpu, GpuFrame};
pub use surface::SurfaceErrorAction;
pub use init::GpuInit;
