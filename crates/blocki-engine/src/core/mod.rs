//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application, and the per-frame context the runtime hands over.

mod app;
mod ctx;

pub use app::{App, AppControl, RenderOutcome};
pub use ctx::{FrameCtx, WindowCtx};
