/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator of evenly spaced frames on a simulated clock.
/// Use this in a loop: `for frame in SimulatedFrames::new(60.0).take(n) { ... }`
#[derive(Debug, Clone)]
pub struct SimulatedFrames {
    frame_number: u64,
    delta: f32,
}

impl SimulatedFrames {
    pub fn new(hz: f32) -> Self {
        Self {
            frame_number: 0,
            delta: 1.0 / hz,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Iterator for SimulatedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        // Multiply rather than accumulate so time does not drift over long runs
        let time = self.frame_number as f64 * self.delta as f64;
        let info = FrameInfo::new(self.frame_number, time as f32, self.delta);
        self.frame_number += 1;
        Some(info)
    }
}
