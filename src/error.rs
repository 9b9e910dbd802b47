use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SketchError {
    #[error("source has {sources} points but target has {targets}")]
    LengthMismatch { sources: usize, targets: usize },
    #[error("{handles} node handles supplied for {points} point pairs")]
    HandleMismatch { handles: usize, points: usize },
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },
    #[error("morph unit must be at least one tick")]
    InvalidUnit,
    #[error("progress step must be positive and finite, got {0}")]
    InvalidStep(f32),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("cell ({x}, {y}, {z}) is outside the board")]
    OutOfBounds { x: i32, y: i32, z: i32 },
    #[error("unknown scene `{0}`")]
    UnknownScene(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SketchError>;
