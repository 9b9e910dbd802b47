pub mod anim;
pub mod board;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod math;
pub mod report;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;

pub use error::{Result, SketchError};
pub use scenes::{build, SceneKind};
