//! Frame driver: startup on the first frame, then one tick per redraw.

use anyhow::{Context, Result};

use blocki_engine::core::{App, AppControl, FrameCtx, RenderOutcome};
use blocki_engine::paint::Color;
use blocki_engine::render::ShaderDocument;
use blocki_engine::time::CadenceMeter;
use blocki_logo::animation::CYCLE_FRAMES;
use blocki_logo::{AnimationState, Position, Transforms, VERTEX_COUNT};

use crate::renderer::{setup_shaders, LogoRenderer};

/// The GPU-free half of a tick: what gets drawn and what follows it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickStep {
    state: AnimationState,
}

impl TickStep {
    pub fn new(state: AnimationState) -> Self {
        Self { state }
    }

    /// Transforms for the frame being drawn.
    pub fn draw(&self) -> Transforms {
        self.state.transforms()
    }

    /// Next state and the positions to upload for it.
    ///
    /// Only a presented frame advances the animation; a skipped or stopped
    /// frame leaves it where it is and uploads nothing.
    pub fn commit(self, outcome: RenderOutcome) -> Option<(AnimationState, [Position; VERTEX_COUNT])> {
        if outcome != RenderOutcome::Presented {
            return None;
        }
        let next = self.state.advanced();
        Some((next, next.positions()))
    }
}

/// Draws `state` and returns the state for the next tick.
///
/// The next redraw is requested before anything is drawn. The advanced
/// positions are uploaded after the frame has been submitted, so the frame
/// just drawn still shows `state`.
pub fn tick(
    renderer: &LogoRenderer,
    ctx: &mut FrameCtx<'_, '_>,
    state: AnimationState,
) -> (AppControl, AnimationState) {
    ctx.schedule_next_frame();

    let step = TickStep::new(state);
    let transforms = step.draw();
    let outcome = ctx.render(Color::WHITE, |rctx, target| {
        renderer.draw(rctx, target, &transforms);
    });

    let next = match step.commit(outcome) {
        Some((next, positions)) => {
            renderer.upload_positions(ctx.gpu.queue(), &positions);
            next
        }
        None => {
            log::debug!("frame {} not presented ({outcome:?})", state.frame());
            state
        }
    };
    (outcome.control(), next)
}

enum Phase {
    /// Waiting for the first frame; holds the shaders to build from.
    Idle(ShaderDocument),
    Running(Box<Running>),
}

struct Running {
    renderer: LogoRenderer,
    state: AnimationState,
    cadence: CadenceMeter,
}

impl Running {
    fn start(document: &ShaderDocument, ctx: &FrameCtx<'_, '_>) -> Result<Self> {
        let (program, bindings) = setup_shaders(document).context("shader setup failed")?;

        let state = AnimationState::new();
        let renderer = LogoRenderer::new(&ctx.render_ctx(), &program, bindings, &state.positions());

        log::info!(
            "logo running on {:?} ({:?}, {}x{})",
            ctx.gpu.backend(),
            ctx.gpu.surface_format(),
            ctx.gpu.size().width,
            ctx.gpu.size().height
        );

        Ok(Self {
            renderer,
            state,
            cadence: CadenceMeter::new(CYCLE_FRAMES as u32),
        })
    }

    fn tick(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (control, next) = tick(&self.renderer, ctx, self.state);
        self.state = next;

        if let Some(cadence) = self.cadence.record(ctx.time.dt) {
            log::debug!(
                "cycle done at frame {}: {:.1} fps",
                self.state.frame(),
                cadence.fps()
            );
        }
        control
    }
}

/// The logo app: idle until the surface exists, then running forever.
pub struct FrameDriver {
    phase: Phase,
}

impl FrameDriver {
    pub fn new(document: ShaderDocument) -> Self {
        Self { phase: Phase::Idle(document) }
    }
}

impl App for FrameDriver {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        if let Phase::Idle(document) = &self.phase {
            let running = Running::start(document, ctx)?;
            self.phase = Phase::Running(Box::new(running));
        }

        match &mut self.phase {
            Phase::Running(running) => Ok(running.tick(ctx)),
            Phase::Idle(_) => Ok(AppControl::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocki_logo::animation::{positions, rotation_angle};

    #[test]
    fn first_tick_draws_unrotated_then_advances() {
        let step = TickStep::new(AnimationState::new());
        assert_eq!(step.draw(), Transforms::rotated_z(0.0));

        let (next, upload) = step.commit(RenderOutcome::Presented).expect("presented frame advances");
        assert_eq!(next.frame(), 1);
        assert_eq!(next.rotation_deg(), rotation_angle(1));
        assert_eq!(upload, positions(1));
    }

    #[test]
    fn draws_current_state_and_uploads_the_next() {
        for frame in [1, 44, 89, 200, 359, 360, 1_000] {
            let state = AnimationState::at_frame(frame);
            let step = TickStep::new(state);
            assert_eq!(step.draw(), state.transforms());

            let (next, upload) = step.commit(RenderOutcome::Presented).expect("presented frame advances");
            assert_eq!(next, state.advanced());
            assert_eq!(upload, positions(frame + 1));
        }
    }

    #[test]
    fn unpresented_frames_do_not_advance() {
        let state = AnimationState::at_frame(57);
        for outcome in [RenderOutcome::Skipped, RenderOutcome::Stopped] {
            assert_eq!(TickStep::new(state).commit(outcome), None);
        }
    }
}
