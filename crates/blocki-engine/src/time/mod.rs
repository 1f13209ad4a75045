//! Time subsystem.
//!
//! Provides frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per render loop, `tick()` once per presented frame
//! - a `CadenceMeter` fed with `FrameTime::dt` to report the achieved rate

mod cadence;
mod frame_clock;

pub use cadence::{Cadence, CadenceMeter};
pub use frame_clock::{FrameClock, FrameTime};
