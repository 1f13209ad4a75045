/// Average frame rate over one measurement window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cadence {
    /// Frames in the window.
    pub frames: u32,
    /// Mean frame time in seconds.
    pub mean_dt: f32,
}

impl Cadence {
    /// Frames per second implied by `mean_dt`.
    #[inline]
    pub fn fps(self) -> f32 {
        if self.mean_dt > 0.0 { 1.0 / self.mean_dt } else { 0.0 }
    }
}

/// Accumulates frame times and reports a [`Cadence`] once per window.
#[derive(Debug, Clone)]
pub struct CadenceMeter {
    window: u32,
    frames: u32,
    total: f32,
}

impl CadenceMeter {
    pub fn new(window: u32) -> Self {
        Self { window: window.max(1), frames: 0, total: 0.0 }
    }

    /// Records one frame; returns the window average when the window fills.
    pub fn record(&mut self, dt: f32) -> Option<Cadence> {
        self.frames += 1;
        self.total += dt;

        if self.frames < self.window {
            return None;
        }

        let cadence = Cadence {
            frames: self.frames,
            mean_dt: self.total / self.frames as f32,
        };
        self.frames = 0;
        self.total = 0.0;
        Some(cadence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_window() {
        let mut meter = CadenceMeter::new(4);
        assert_eq!(meter.record(0.02), None);
        assert_eq!(meter.record(0.02), None);
        assert_eq!(meter.record(0.02), None);

        let c = meter.record(0.02).expect("window full");
        assert_eq!(c.frames, 4);
        assert!((c.fps() - 50.0).abs() < 1e-3);

        assert_eq!(meter.record(0.01), None);
    }

    #[test]
    fn zero_window_reports_every_frame() {
        let mut meter = CadenceMeter::new(0);
        assert!(meter.record(0.016).is_some());
        assert!(meter.record(0.016).is_some());
    }

    #[test]
    fn degenerate_cadence_has_zero_fps() {
        let c = Cadence { frames: 1, mean_dt: 0.0 };
        assert_eq!(c.fps(), 0.0);
    }
}
