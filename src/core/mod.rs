pub mod frame_loop;
pub mod timer;

pub use frame_loop::{FrameLoop, RunStats};
pub use timer::FixedStep;
