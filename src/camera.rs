use glam::{Vec2, Vec3};
use log::debug;
use std::f32::consts::FRAC_PI_2;

use crate::math::{Ray, AABB};

/// Horizontal velocity lost per second, as a fraction of itself
pub const DAMPING: f32 = 10.0;
pub const GRAVITY: f32 = 9.8;
pub const MASS: f32 = 100.0;
pub const JUMP_IMPULSE: f32 = 350.0;
pub const MOVE_ACCEL: f32 = 400.0;
/// Lowest eye height; the floor is at y = 0
pub const EYE_HEIGHT: f32 = 10.0;
/// Length of the downward probe that detects standing on an obstacle
pub const GROUND_PROBE: f32 = 10.0;

/// Already-decoded movement intent for one frame
#[derive(Default, Clone, Copy, Debug)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MovementState {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Unit intent in (right, forward), zero when idle
    fn direction(&self) -> Vec2 {
        Vec2::new(
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.forward, self.backward),
        )
        .normalize_or_zero()
    }
}

/// First-person walker with damping, gravity, jumping and landing on boxes
#[derive(Debug, Clone)]
pub struct FirstPersonWalker {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// x: right, y: up, z: forward, relative to the current yaw
    velocity: Vec3,
    can_jump: bool,
    on_object: bool,
}

impl FirstPersonWalker {
    pub fn new(position: Vec3) -> Self {
        Self {
            position: Vec3::new(position.x, position.y.max(EYE_HEIGHT), position.z),
            yaw: 0.0,
            pitch: 0.0,
            velocity: Vec3::ZERO,
            can_jump: false,
            on_object: false,
        }
    }

    /// Horizontal facing; yaw 0 looks down -Z
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn view_direction(&self) -> Vec3 {
        let flat = self.forward() * self.pitch.cos();
        (flat + Vec3::Y * self.pitch.sin()).normalize()
    }

    /// Applies a look delta in radians; pitch stops just short of straight up/down
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        const LIMIT: f32 = FRAC_PI_2 - 0.01;
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-LIMIT, LIMIT);
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    pub fn on_object(&self) -> bool {
        self.on_object
    }

    /// Steps the walker by `delta` seconds; returns whether a jump started.
    pub fn update(&mut self, delta: f32, movement: &MovementState, obstacles: &[AABB]) -> bool {
        self.on_object = self.probe_ground(obstacles);

        // long frames stop horizontal motion instead of reversing it
        let damping = (1.0 - DAMPING * delta).max(0.0);
        self.velocity.x *= damping;
        self.velocity.z *= damping;
        self.velocity.y -= GRAVITY * MASS * delta;

        let direction = movement.direction();
        if movement.forward || movement.backward {
            self.velocity.z += direction.y * MOVE_ACCEL * delta;
        }
        if movement.left || movement.right {
            self.velocity.x += direction.x * MOVE_ACCEL * delta;
        }

        if self.on_object {
            self.velocity.y = self.velocity.y.max(0.0);
            self.can_jump = true;
        }

        let jumped = movement.jump && self.can_jump;
        if jumped {
            self.velocity.y += JUMP_IMPULSE;
            self.can_jump = false;
            debug!("jump from y = {:.1}", self.position.y);
        }

        self.position += self.right() * self.velocity.x * delta;
        self.position += self.forward() * self.velocity.z * delta;
        self.position.y += self.velocity.y * delta;

        if self.position.y < EYE_HEIGHT {
            self.velocity.y = 0.0;
            self.position.y = EYE_HEIGHT;
            self.can_jump = true;
        }

        jumped
    }

    fn probe_ground(&self, obstacles: &[AABB]) -> bool {
        let ray = Ray::new(self.position, -Vec3::Y);
        obstacles
            .iter()
            .filter_map(|b| ray.intersect_aabb(b))
            .any(|t| t <= GROUND_PROBE)
    }
}
