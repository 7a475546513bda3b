/// Fixed-timestep accumulator, after Glenn Fiedler's "Fix Your Timestep".
///
/// Each rendered frame reports a wall-clock delta; the clock decides how many
/// fixed steps are due and exposes the leftover fraction as the blend factor
/// for interpolated rendering.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    pub step: f32,
    pub time_scale: f32,
    pub max_frame_accum: f32,
    pub accumulator: f32,
    pub t: f32,
    pub steps_taken: u64,
}

impl SimClock {
    pub fn new(step: f32, time_scale: f32, max_frame_accum: f32) -> Self {
        Self {
            step,
            time_scale,
            max_frame_accum,
            accumulator: 0.0,
            t: 0.0,
            steps_taken: 0,
        }
    }

    /// Scale and clamp one frame's wall-clock delta, then fold it into the
    /// accumulator. Time beyond the clamp is discarded rather than simulated,
    /// which bounds the catch-up work on slow frames.
    pub fn begin_frame(&mut self, frame_dt: f32) {
        let mut scaled = frame_dt * self.time_scale;
        if scaled.is_nan() {
            scaled = 0.0;
        }
        // The clamp also catches infinite deltas
        let clamped = scaled.clamp(-self.max_frame_accum, self.max_frame_accum);
        if clamped != scaled {
            log::debug!(
                "frame delta {:.3}s exceeds clamp, dropping {:.3}s of simulated time",
                scaled,
                (scaled - clamped).abs()
            );
        }
        self.accumulator += clamped;
    }

    /// True while at least one full fixed step worth of time is accumulated
    pub fn step_due(&self) -> bool {
        self.accumulator.abs() >= self.step
    }

    /// Consume one fixed step. The sign follows the accumulated time, so
    /// negative time scales run the simulation in reverse.
    pub fn consume_step(&mut self) -> f32 {
        let dt = self.step.copysign(self.accumulator);
        self.t += dt;
        self.accumulator -= dt;
        self.steps_taken += 1;
        dt
    }

    /// Fractional position of the frame between the last two discrete states
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}
