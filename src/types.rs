use glam::Vec3;

/// Per-node record laid out for direct upload into an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub rotation: [f32; 3], // Euler XYZ, radians
    pub _pad2: f32,
    pub scale: [f32; 3],
    pub _pad3: f32,
    pub color: [f32; 3],
    pub visible: f32, // 1.0 if drawn, 0.0 if hidden
    pub uv_offset: [f32; 2],
    pub uv_scale: [f32; 2],
}

impl InstanceData {
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            _pad1: 0.0,
            rotation: rotation.to_array(),
            _pad2: 0.0,
            scale: scale.to_array(),
            _pad3: 0.0,
            color,
            visible: 1.0,
            uv_offset: [0.0, 0.0],
            uv_scale: [1.0, 1.0],
        }
    }
}

/// Region of a shared texture (e.g. a video frame) mapped onto one tile
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UvRect {
    pub offset: [f32; 2],
    pub scale: [f32; 2],
}

impl UvRect {
    pub const FULL: UvRect = UvRect {
        offset: [0.0, 0.0],
        scale: [1.0, 1.0],
    };
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}
