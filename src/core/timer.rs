/// Fixed-timestep accumulator - turns variable wall-clock deltas into a
/// whole number of fixed steps, carrying the remainder to the next call
#[derive(Debug, Clone)]
pub struct FixedStep {
    timestep: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedStep {
    /// Create accumulator stepping at `hz`, yielding at most `max_steps` per call
    pub fn new(hz: f32, max_steps: u32) -> Self {
        Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Feed elapsed seconds, returns how many fixed steps to run.
    /// Time beyond `max_steps` is dropped so a stalled host cannot snowball.
    pub fn advance(&mut self, delta: f32) -> u32 {
        self.accumulator += delta.max(0.0);

        let due = (self.accumulator / self.timestep) as u32;
        let steps = due.min(self.max_steps);

        self.accumulator -= due as f32 * self.timestep;
        steps
    }

    /// Interpolation alpha between the last step and the next
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.timestep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_remainder() {
        let mut step = FixedStep::new(60.0, 4);
        assert_eq!(step.advance(0.01), 0);
        assert_eq!(step.advance(0.01), 1);
        assert!(step.alpha() > 0.0 && step.alpha() < 1.0);
    }

    #[test]
    fn caps_and_drops_backlog() {
        let mut step = FixedStep::new(60.0, 4);
        assert_eq!(step.advance(1.0), 4);
        // the backlog beyond the cap is gone
        assert_eq!(step.advance(0.0), 0);
    }

    #[test]
    fn ignores_negative_deltas() {
        let mut step = FixedStep::new(10.0, 4);
        assert_eq!(step.advance(-5.0), 0);
        assert_eq!(step.advance(0.1), 1);
    }
}
