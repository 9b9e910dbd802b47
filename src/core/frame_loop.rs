use log::{debug, info};

use super::timer::FixedStep;
use crate::frame::{FrameInfo, SimulatedFrames};
use crate::traits::Sketch;

/// Totals of one driven run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    pub frames: u64,
    pub simulated_seconds: f32,
}

/// Drives a sketch at a fixed rate, either on a simulated clock or from a
/// host's variable frame deltas
pub struct FrameLoop {
    hz: f32,
    stepper: FixedStep,
    log_every: u64,
    frame_number: u64,
}

impl FrameLoop {
    pub fn new(hz: f32, max_steps: u32) -> Self {
        Self {
            hz,
            stepper: FixedStep::new(hz, max_steps),
            log_every: 0,
            frame_number: 0,
        }
    }

    /// Log a progress line every `n` frames (0 disables)
    pub fn with_log_every(mut self, n: u64) -> Self {
        self.log_every = n;
        self
    }

    /// Runs exactly `frames` fixed steps without touching the wall clock.
    pub fn run(&mut self, sketch: &mut dyn Sketch, frames: u64) -> RunStats {
        info!("running '{}' for {} frames at {} Hz", sketch.name(), frames, self.hz);

        let mut last = None;
        for frame in SimulatedFrames::new(self.hz).take(frames as usize) {
            self.step(sketch, &frame);
            last = Some(frame);
        }

        RunStats {
            frames,
            simulated_seconds: last.map_or(0.0, |f| f.time + f.delta),
        }
    }

    /// Feeds a host frame delta; runs however many fixed steps are due.
    pub fn pump(&mut self, sketch: &mut dyn Sketch, wall_delta: f32) -> u32 {
        let steps = self.stepper.advance(wall_delta);
        let dt = self.stepper.timestep();
        for _ in 0..steps {
            let frame = FrameInfo::new(self.frame_number, self.frame_number as f32 * dt, dt);
            self.step(sketch, &frame);
        }
        steps
    }

    pub fn frames_run(&self) -> u64 {
        self.frame_number
    }

    fn step(&mut self, sketch: &mut dyn Sketch, frame: &FrameInfo) {
        sketch.update(frame);
        self.frame_number += 1;

        if self.log_every > 0 && self.frame_number % self.log_every == 0 {
            info!("'{}' frame {} (t = {:.2}s)", sketch.name(), self.frame_number, frame.time);
        } else {
            debug!("'{}' frame {}", sketch.name(), self.frame_number);
        }
    }
}
