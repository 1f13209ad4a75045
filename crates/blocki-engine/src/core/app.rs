use anyhow::Result;
use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// How a [`FrameCtx::render`](super::FrameCtx::render) call ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderOutcome {
    /// The frame was drawn and presented.
    Presented,
    /// No surface texture this time; nothing was drawn.
    Skipped,
    /// The surface is gone for good; nothing was drawn.
    Stopped,
}

impl RenderOutcome {
    /// Whether the loop should keep running after this frame.
    pub fn control(self) -> AppControl {
        match self {
            RenderOutcome::Presented | RenderOutcome::Skipped => AppControl::Continue,
            RenderOutcome::Stopped => AppControl::Exit,
        }
    }
}

/// Application contract implemented by the demo.
pub trait App {
    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw.
    ///
    /// Returning an error stops the runtime; the error is handed back to the
    /// caller of [`crate::window::Runtime::run`]. Frames only keep coming while
    /// the app asks for them via [`FrameCtx::schedule_next_frame`].
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_lost_surface_stops_the_loop() {
        assert_eq!(RenderOutcome::Presented.control(), AppControl::Continue);
        assert_eq!(RenderOutcome::Skipped.control(), AppControl::Continue);
        assert_eq!(RenderOutcome::Stopped.control(), AppControl::Exit);
    }
}
