// config.rs - JSON run configuration, one section per sketch
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SketchError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub frame: FrameConfig,
    pub spinning_cube: SpinningCubeConfig,
    pub mosaic: MosaicConfig,
    pub walkabout: WalkaboutConfig,
    pub minesweeper: MinesweeperConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub hz: f32,
    pub max_steps: u32,
    /// Progress log interval in frames, 0 disables
    pub log_every: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            hz: 60.0,
            max_steps: 4,
            log_every: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinningCubeConfig {
    pub size: f32,
    /// Radians added to the Euler angles each frame
    pub rate: [f32; 3],
}

impl Default for SpinningCubeConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            rate: [0.005, 0.01, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicConfig {
    pub columns: u32,
    pub rows: u32,
    pub tile_size: f32,
    pub sphere_radius: f32,
    pub unit: u32,
    pub progress_step: f32,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 10,
            tile_size: 40.0,
            sphere_radius: 200.0,
            unit: 500,
            progress_step: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkaboutConfig {
    pub box_count: u32,
    pub seed: u64,
    /// Scripted walk: seconds per leg before turning
    pub leg_seconds: f32,
}

impl Default for WalkaboutConfig {
    fn default() -> Self {
        Self {
            box_count: 500,
            seed: 7,
            leg_seconds: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinesweeperConfig {
    pub size: u32,
    pub mines: u32,
    pub seed: u64,
    pub cell_size: f32,
    /// Frames between scripted picks
    pub pick_interval: u64,
}

impl Default for MinesweeperConfig {
    fn default() -> Self {
        Self {
            size: 6,
            mines: 20,
            seed: 42,
            cell_size: 50.0,
            pick_interval: 30,
        }
    }
}

impl SketchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: SketchConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), SketchError> {
        let invalid = |msg: &str| -> std::result::Result<(), SketchError> {
            Err(SketchError::InvalidConfig(msg.to_string()))
        };

        if !(self.frame.hz.is_finite() && self.frame.hz > 0.0) {
            return invalid("frame.hz must be positive");
        }
        if self.frame.max_steps == 0 {
            return invalid("frame.max_steps must be at least 1");
        }
        if self.mosaic.columns == 0 || self.mosaic.rows == 0 {
            return invalid("mosaic needs at least one row and column");
        }
        if !(self.mosaic.tile_size > 0.0 && self.mosaic.sphere_radius > 0.0) {
            return invalid("mosaic sizes must be positive");
        }
        if self.spinning_cube.size <= 0.0 {
            return invalid("spinning_cube.size must be positive");
        }
        if self.minesweeper.size == 0 || self.minesweeper.cell_size <= 0.0 {
            return invalid("minesweeper board must have a positive size");
        }
        if self.minesweeper.pick_interval == 0 {
            return invalid("minesweeper.pick_interval must be at least 1");
        }
        if self.walkabout.leg_seconds <= 0.0 {
            return invalid("walkabout.leg_seconds must be positive");
        }
        // unit, progress_step and mine counts are checked where they are used
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: SketchConfig = serde_json::from_str(r#"{ "mosaic": { "columns": 4 } }"#).unwrap();
        assert_eq!(config.mosaic.columns, 4);
        assert_eq!(config.mosaic.rows, MosaicConfig::default().rows);
        assert_eq!(config.frame, FrameConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_rate() {
        let mut config = SketchConfig::default();
        config.frame.hz = 0.0;
        assert!(matches!(config.validate(), Err(SketchError::InvalidConfig(_))));
    }

    #[test]
    fn load_reports_path_on_error() {
        let err = SketchConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("not/here.json"));
    }

    #[test]
    fn load_round_trips_file() {
        let path = std::env::temp_dir().join(format!("sketch-config-{}.json", std::process::id()));
        let mut config = SketchConfig::default();
        config.minesweeper.mines = 3;
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = SketchConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
