mod sketch;

pub use sketch::Sketch;
