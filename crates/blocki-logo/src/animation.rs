//! Frame-driven animation.
//!
//! Everything here is a function of the frame counter. The phase used by all
//! rules is `(frame + 1) mod 360`, in degrees:
//!
//! - **gap**: during `(45, 90]` and `(225, 270]` the two inner bars slide apart
//!   horizontally by `(0.4 / 45) * (phase mod 45)`; zero elsewhere.
//! - **dist**: the bottom bars move vertically by `sin(phase) * 0.07`,
//!   neighbouring bars in opposite directions.
//! - **rotation**: the whole logo swings about z by `sin(phase) * 90` degrees.

use crate::geometry::{
    bar_moves_up, Position, BASE_POSITIONS, BOTTOM_BARS, LEFT_BAR, RIGHT_BAR, VERTEX_COUNT,
};
use crate::transform::Transforms;

/// Frames per animation cycle.
pub const CYCLE_FRAMES: u64 = 360;

/// Upper bound of the gap, reached just before the end of each gap window.
pub const MAX_GAP: f64 = 0.4;

/// Amplitude of the bottom bar motion.
pub const MAX_DIST: f64 = 0.07;

/// Amplitude of the rotation, in degrees.
pub const MAX_ROTATION_DEG: f64 = 90.0;

const GAP_WINDOW_DEG: u32 = 45;

/// Phase of `frame` in whole degrees.
#[inline]
pub fn phase_degree(frame: u64) -> u32 {
    (frame.wrapping_add(1) % CYCLE_FRAMES) as u32
}

/// Horizontal offset of the inner bars at `frame`.
pub fn gap(frame: u64) -> f64 {
    let degree = phase_degree(frame);
    let opening = (46..=90).contains(&degree) || (226..=270).contains(&degree);
    if !opening {
        return 0.0;
    }
    (MAX_GAP / f64::from(GAP_WINDOW_DEG)) * f64::from(degree % GAP_WINDOW_DEG)
}

/// Vertical offset of the bottom bars at `frame`.
pub fn dist(frame: u64) -> f64 {
    f64::from(phase_degree(frame)).to_radians().sin() * MAX_DIST
}

/// Rotation angle in degrees that follows `frame`.
pub fn rotation_angle(frame: u64) -> f64 {
    f64::from(phase_degree(frame)).to_radians().sin() * MAX_ROTATION_DEG
}

/// Deformed mesh for `frame`.
///
/// Offsets are added in `f64`; each coordinate is rounded to `f32` once.
pub fn positions(frame: u64) -> [Position; VERTEX_COUNT] {
    let gap = gap(frame);
    let dist = dist(frame);

    let mut out = BASE_POSITIONS;
    for p in &mut out[LEFT_BAR] {
        p[0] = shifted(p[0], gap);
    }
    for p in &mut out[RIGHT_BAR] {
        p[0] = shifted(p[0], -gap);
    }
    for v in BOTTOM_BARS {
        let by = if bar_moves_up(v) { dist } else { -dist };
        out[v][1] = shifted(out[v][1], by);
    }
    out
}

#[inline]
fn shifted(coord: f32, by: f64) -> f32 {
    (f64::from(coord) + by) as f32
}

/// Animation state threaded through the render loop.
///
/// The frame counter only grows; the rotation is derived from it when the
/// state advances. A fresh state starts unrotated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationState {
    frame: u64,
    rotation_deg: f64,
}

impl AnimationState {
    pub const fn new() -> Self {
        Self { frame: 0, rotation_deg: 0.0 }
    }

    /// State reached after `frame` ticks from [`AnimationState::new`].
    pub fn at_frame(frame: u64) -> Self {
        if frame == 0 {
            return Self::new();
        }
        Self { frame, rotation_deg: rotation_angle(frame) }
    }

    #[inline]
    pub fn frame(self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn rotation_deg(self) -> f64 {
        self.rotation_deg
    }

    /// Mesh positions for the current frame.
    pub fn positions(self) -> [Position; VERTEX_COUNT] {
        positions(self.frame)
    }

    /// Modelview/projection for the current rotation.
    pub fn transforms(self) -> Transforms {
        Transforms::rotated_z(self.rotation_deg)
    }

    /// Returns the state for the next tick.
    #[must_use]
    pub fn advanced(self) -> Self {
        let frame = self.frame.wrapping_add(1);
        Self { frame, rotation_deg: rotation_angle(frame) }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
