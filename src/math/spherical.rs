use glam::Vec3;
use std::f32::consts::PI;

/// Smallest polar angle kept away from either pole by [`Spherical::make_safe`].
pub const POLE_EPSILON: f32 = 1e-6;

/// Spherical coordinates with `phi` measured from +Y and `theta` around Y from +Z.
///
/// `x = r sin(phi) sin(theta)`, `y = r cos(phi)`, `z = r sin(phi) cos(theta)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Converts a cartesian offset. The zero vector maps to all-zero
    /// coordinates instead of NaN.
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }

        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_vec3(&self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Clamps `phi` to `[POLE_EPSILON, PI - POLE_EPSILON]`.
    pub fn make_safe(&mut self) -> &mut Self {
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);
        self
    }
}

/// Centre of the smallest sphere passing through `a` and `b`.
pub fn pivot(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}
