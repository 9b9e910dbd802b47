mod minesweeper;
mod mosaic;
mod spinning_cube;
mod walkabout;

pub use minesweeper::{count_color, Minesweeper};
pub use mosaic::{sphere_layout, wall_layout, Mosaic};
pub use spinning_cube::SpinningCube;
pub use walkabout::{scatter_boxes, Walkabout, BOX_SIZE};

use std::fmt;
use std::str::FromStr;

use crate::config::SketchConfig;
use crate::error::{Result, SketchError};
use crate::traits::Sketch;

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    SpinningCube,
    Mosaic,
    Walkabout,
    Minesweeper,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::SpinningCube,
        SceneKind::Mosaic,
        SceneKind::Walkabout,
        SceneKind::Minesweeper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::SpinningCube => "spinning-cube",
            SceneKind::Mosaic => "mosaic",
            SceneKind::Walkabout => "walkabout",
            SceneKind::Minesweeper => "minesweeper",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SceneKind::SpinningCube => "a single cube turning about two axes",
            SceneKind::Mosaic => "video tiles morphing between a wall and a sphere",
            SceneKind::Walkabout => "first-person walk with gravity among scattered boxes",
            SceneKind::Minesweeper => "voxel minesweeper with ray picking",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self> {
        SceneKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| SketchError::UnknownScene(s.to_string()))
    }
}

/// Builds the sketch for `kind` from its config section.
pub fn build(kind: SceneKind, config: &SketchConfig) -> Result<Box<dyn Sketch>> {
    Ok(match kind {
        SceneKind::SpinningCube => Box::new(SpinningCube::new(&config.spinning_cube)),
        SceneKind::Mosaic => Box::new(Mosaic::new(&config.mosaic)?),
        SceneKind::Walkabout => Box::new(Walkabout::new(&config.walkabout)),
        SceneKind::Minesweeper => Box::new(Minesweeper::new(&config.minesweeper)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in SceneKind::ALL {
            assert_eq!(kind.name().parse::<SceneKind>().unwrap(), kind);
        }
        assert_eq!(
            "physics".parse::<SceneKind>(),
            Err(SketchError::UnknownScene("physics".into()))
        );
    }

    #[test]
    fn builds_every_scene() {
        let config = SketchConfig::default();
        for kind in SceneKind::ALL {
            let sketch = build(kind, &config).unwrap();
            assert_eq!(sketch.name(), kind.name());
            assert!(!sketch.scene().is_empty());
        }
    }
}
