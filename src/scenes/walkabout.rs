use glam::Vec3;
use log::{debug, info};
use serde_json::{json, Map, Value};
use std::f32::consts::FRAC_PI_2;

use crate::camera::{FirstPersonWalker, MovementState};
use crate::config::WalkaboutConfig;
use crate::frame::FrameInfo;
use crate::math::{hsv_to_rgb, AABB};
use crate::scene::{Node, NodeId, NodeKind, Scene};
use crate::traits::Sketch;

pub const BOX_SIZE: f32 = 20.0;

/// Box centres snapped to a 20-unit lattice, stacked up to 20 high
pub fn scatter_boxes(count: u32, seed: u64) -> Vec<Vec3> {
    let rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let x = (rng.f32() * 20.0 - 10.0).floor() * BOX_SIZE;
            let y = (rng.f32() * 20.0).floor() * BOX_SIZE + BOX_SIZE * 0.5;
            let z = (rng.f32() * 20.0 - 10.0).floor() * BOX_SIZE;
            Vec3::new(x, y, z)
        })
        .collect()
}

/// First-person walk among scattered boxes, driven by a scripted walker
pub struct Walkabout {
    scene: Scene,
    camera: NodeId,
    walker: FirstPersonWalker,
    obstacles: Vec<AABB>,
    leg_seconds: f32,
    elapsed: f32,
    legs: u32,
    jumps: u32,
    landings: u32,
    max_height: f32,
    was_on_object: bool,
}

impl Walkabout {
    pub fn new(config: &WalkaboutConfig) -> Self {
        let rng = fastrand::Rng::with_seed(config.seed.wrapping_add(1));
        let mut scene = Scene::new();

        let obstacles = scatter_boxes(config.box_count, config.seed)
            .into_iter()
            .enumerate()
            .map(|(i, center)| {
                let color = hsv_to_rgb(rng.f32() * 0.2 + 0.5, 0.25, rng.f32() * 0.25 + 0.75);
                let node = Node::new(format!("box-{i}"), NodeKind::Obstacle, center)
                    .with_scale(Vec3::splat(BOX_SIZE))
                    .with_color(color);
                let bounds = node.bounds();
                scene.add(node);
                bounds
            })
            .collect();

        let walker = FirstPersonWalker::new(Vec3::new(0.0, 10.0, 0.0));
        let camera = scene.add(Node::new("camera", NodeKind::Camera, walker.position));

        info!("walkabout: {} boxes", config.box_count);

        Self {
            scene,
            camera,
            walker,
            obstacles,
            leg_seconds: config.leg_seconds,
            elapsed: 0.0,
            legs: 0,
            jumps: 0,
            landings: 0,
            max_height: 0.0,
            was_on_object: false,
        }
    }

    pub fn walker(&self) -> &FirstPersonWalker {
        &self.walker
    }

    pub fn obstacles(&self) -> &[AABB] {
        &self.obstacles
    }

    /// Walk forward, turn a quarter every leg, jump at the start of odd legs
    fn scripted_movement(&mut self, delta: f32) -> MovementState {
        self.elapsed += delta;
        let mut jump = false;
        if self.elapsed >= self.leg_seconds {
            self.elapsed -= self.leg_seconds;
            self.legs += 1;
            self.walker.look(FRAC_PI_2, 0.0);
            jump = self.legs % 2 == 1;
            debug!("walkabout leg {} at {:?}", self.legs, self.walker.position);
        }

        MovementState {
            forward: true,
            jump,
            ..Default::default()
        }
    }
}

impl Sketch for Walkabout {
    fn name(&self) -> &str {
        "walkabout"
    }

    fn update(&mut self, frame: &FrameInfo) {
        let movement = self.scripted_movement(frame.delta);
        if self.walker.update(frame.delta, &movement, &self.obstacles) {
            self.jumps += 1;
        }
        if self.walker.on_object() && !self.was_on_object {
            self.landings += 1;
        }
        self.was_on_object = self.walker.on_object();
        self.max_height = self.max_height.max(self.walker.position.y);

        if let Some(node) = self.scene.get_mut(self.camera) {
            node.position = self.walker.position;
            node.rotation = Vec3::new(self.walker.pitch, self.walker.yaw, 0.0);
        }
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn summary(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("boxes".into(), json!(self.obstacles.len()));
        map.insert("position".into(), json!(self.walker.position.to_array()));
        map.insert("legs".into(), json!(self.legs));
        map.insert("jumps".into(), json!(self.jumps));
        map.insert("landings_on_boxes".into(), json!(self.landings));
        map.insert("max_height".into(), json!(self.max_height));
        map
    }
}
