use glam::Vec3;
use log::info;
use serde_json::{json, Map, Value};

use crate::anim::{InterpolatorConfig, Phase, PositionalInterpolator};
use crate::config::MosaicConfig;
use crate::error::Result;
use crate::frame::FrameInfo;
use crate::math::Spherical;
use crate::scene::{Node, NodeId, NodeKind, Scene};
use crate::traits::Sketch;
use crate::types::UvRect;

/// Flat wall of `columns x rows` tiles centred on the origin in the XY plane.
/// Each tile samples its own region of the shared video frame.
pub fn wall_layout(columns: u32, rows: u32, pitch: f32) -> Vec<(Vec3, UvRect)> {
    let scale = [1.0 / columns as f32, 1.0 / rows as f32];
    (0..columns)
        .flat_map(|i| {
            (0..rows).map(move |j| {
                let position = Vec3::new(
                    (i as f32 - columns as f32 / 2.0) * pitch,
                    (j as f32 - rows as f32 / 2.0) * pitch,
                    0.0,
                );
                let uv = UvRect {
                    offset: [i as f32 * scale[0], j as f32 * scale[1]],
                    scale,
                };
                (position, uv)
            })
        })
        .collect()
}

/// `count` points spread evenly over a sphere (golden spiral).
pub fn sphere_layout(count: usize, radius: f32) -> Vec<Vec3> {
    let n = count as f32;
    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / n).clamp(-1.0, 1.0).acos();
            let theta = (n * std::f32::consts::PI).sqrt() * phi;
            Spherical::new(radius, phi, theta).to_vec3()
        })
        .collect()
}

/// Video mosaic that morphs between a wall of tiles and a sphere
pub struct Mosaic {
    scene: Scene,
    interpolator: PositionalInterpolator,
    radius: f32,
}

impl Mosaic {
    pub fn new(config: &MosaicConfig) -> Result<Self> {
        let wall = wall_layout(config.columns, config.rows, config.tile_size);
        let targets = sphere_layout(wall.len(), config.sphere_radius);

        let mut scene = Scene::new();
        let tile_scale = Vec3::new(config.tile_size, config.tile_size, config.tile_size * 0.5);
        let handles: Vec<NodeId> = wall
            .iter()
            .enumerate()
            .map(|(i, (position, uv))| {
                scene.add(Node::new(format!("tile-{i}"), NodeKind::Tile { uv: *uv }, *position).with_scale(tile_scale))
            })
            .collect();
        let sources: Vec<Vec3> = wall.iter().map(|(p, _)| *p).collect();

        let interpolator = PositionalInterpolator::new(
            handles,
            &sources,
            &targets,
            InterpolatorConfig {
                unit: config.unit,
                progress_step: config.progress_step,
            },
        )?;

        info!("mosaic: {} tiles, sphere radius {}", sources.len(), config.sphere_radius);

        Ok(Self {
            scene,
            interpolator,
            radius: config.sphere_radius,
        })
    }

    pub fn interpolator(&self) -> &PositionalInterpolator {
        &self.interpolator
    }

    /// Tile count in each phase, in cycle order starting with dormant.
    pub fn phase_histogram(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for i in 0..self.interpolator.len() {
            let slot = match self.interpolator.phase(i) {
                Phase::Dormant => 0,
                Phase::MorphingOut => 1,
                Phase::HoldingFar => 2,
                Phase::MorphingBack => 3,
                Phase::HoldingNear => 4,
            };
            counts[slot] += 1;
        }
        counts
    }
}

impl Sketch for Mosaic {
    fn name(&self) -> &str {
        "mosaic"
    }

    fn update(&mut self, _frame: &FrameInfo) {
        self.interpolator.tick(&mut self.scene);
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn summary(&self) -> Map<String, Value> {
        let [dormant, morphing_out, holding_far, morphing_back, holding_near] = self.phase_histogram();
        let mut map = Map::new();
        map.insert("tiles".into(), json!(self.interpolator.len()));
        map.insert("sphere_radius".into(), json!(self.radius));
        map.insert("progress".into(), json!(self.interpolator.progress()));
        map.insert(
            "phases".into(),
            json!({
                "dormant": dormant,
                "morphing_out": morphing_out,
                "holding_far": holding_far,
                "morphing_back": morphing_back,
                "holding_near": holding_near,
            }),
        );
        map
    }
}
