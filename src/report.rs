use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::core::RunStats;
use crate::traits::Sketch;

/// What a headless run did, written as JSON
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub scene: String,
    pub started_at: String,
    pub frames: u64,
    pub simulated_seconds: f32,
    pub nodes: usize,
    pub bounds_min: Option<[f32; 3]>,
    pub bounds_max: Option<[f32; 3]>,
    pub summary: Map<String, Value>,
}

impl RunReport {
    pub fn new(sketch: &dyn Sketch, stats: RunStats, started_at: chrono::DateTime<chrono::Utc>) -> Self {
        let bounds = sketch.scene().bounds();
        Self {
            scene: sketch.name().to_string(),
            started_at: started_at.to_rfc3339(),
            frames: stats.frames,
            simulated_seconds: stats.simulated_seconds,
            nodes: sketch.scene().len(),
            bounds_min: bounds.map(|b| b.min.to_array()),
            bounds_max: bounds.map(|b| b.max.to_array()),
            summary: sketch.summary(),
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write report: {:?}", path))
    }
}
