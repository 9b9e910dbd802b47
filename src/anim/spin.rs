use glam::Vec3;
use std::f32::consts::TAU;

use crate::scene::{NodeId, Scene};

/// Constant Euler-angle spin applied to a fixed set of nodes once per frame
#[derive(Clone, Debug)]
pub struct Spin {
    targets: Vec<NodeId>,
    rate: Vec3,
}

impl Spin {
    pub fn new(targets: Vec<NodeId>, rate: Vec3) -> Self {
        Self { targets, rate }
    }

    pub fn rate(&self) -> Vec3 {
        self.rate
    }

    /// Angles are wrapped into `[0, TAU)` so long runs keep full precision.
    pub fn apply(&self, scene: &mut Scene) {
        for &id in &self.targets {
            if let Some(node) = scene.get_mut(id) {
                let r = node.rotation + self.rate;
                node.rotation = Vec3::new(r.x.rem_euclid(TAU), r.y.rem_euclid(TAU), r.z.rem_euclid(TAU));
            }
        }
    }
}
