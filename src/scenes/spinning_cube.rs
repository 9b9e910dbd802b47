use glam::Vec3;
use serde_json::{json, Map, Value};

use crate::anim::Spin;
use crate::config::SpinningCubeConfig;
use crate::frame::FrameInfo;
use crate::scene::{Node, NodeId, NodeKind, Scene};
use crate::traits::Sketch;

/// One textured cube turning about X and Y
pub struct SpinningCube {
    scene: Scene,
    cube: NodeId,
    spin: Spin,
}

impl SpinningCube {
    pub fn new(config: &SpinningCubeConfig) -> Self {
        let mut scene = Scene::new();
        let cube = scene.add(Node::new("cube", NodeKind::Cube, Vec3::ZERO).with_scale(Vec3::splat(config.size)));
        let spin = Spin::new(vec![cube], Vec3::from_array(config.rate));
        Self { scene, cube, spin }
    }

    pub fn rotation(&self) -> Vec3 {
        self.scene.get(self.cube).map_or(Vec3::ZERO, |n| n.rotation)
    }
}

impl Sketch for SpinningCube {
    fn name(&self) -> &str {
        "spinning-cube"
    }

    fn update(&mut self, _frame: &FrameInfo) {
        self.spin.apply(&mut self.scene);
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn summary(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("rotation".into(), json!(self.rotation().to_array()));
        map
    }
}
