use serde_json::{Map, Value};

use crate::frame::FrameInfo;
use crate::scene::Scene;

/// A self-contained demo scene driven once per frame by a host loop
pub trait Sketch {
    /// Short identifier used on the command line and in reports
    fn name(&self) -> &str;

    /// Advance scene state by one frame
    fn update(&mut self, frame: &FrameInfo);

    fn scene(&self) -> &Scene;

    /// Scene-specific facts for run reports
    fn summary(&self) -> Map<String, Value> {
        Map::new()
    }
}
