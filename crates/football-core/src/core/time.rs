/// Fixed timestep accumulator.
/// Turns variable browser frame times into a whole number of game ticks, so
/// the shot delays elapse identically at 30, 60 or 144 fps.
pub struct FixedTimestep {
    dt: f32,
    /// Frame time not yet consumed by a tick.
    carry: f32,
    /// Upper bound on ticks per frame (a backgrounded tab can report huge deltas).
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            carry: 0.0,
            max_steps: 10,
        }
    }

    /// Feed one frame's delta. Returns the number of fixed ticks to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.carry += frame_dt;
        if self.carry >= self.dt * self.max_steps as f32 {
            self.carry = 0.0;
            return self.max_steps;
        }
        let steps = (self.carry / self.dt) as u32;
        self.carry -= steps as f32 * self.dt;
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_per_exact_frame() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn short_frames_carry_over() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
        // 0.018 - 1/60 leaves too little for another tick
        assert_eq!(ts.accumulate(0.010), 0);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);
        // the excess is dropped, not replayed
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn bogus_deltas_run_nothing() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-0.5), 0);
        assert_eq!(ts.accumulate(f32::NAN), 0);
        assert_eq!(ts.accumulate(f32::INFINITY), 0);
    }
}
