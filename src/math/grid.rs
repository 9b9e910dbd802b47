use glam::{IVec3, UVec3, Vec3};

use super::{Ray, AABB};

pub fn world_to_cell(pos: Vec3, bounds_min: Vec3, cell_size: f32) -> IVec3 {
    ((pos - bounds_min) / cell_size).floor().as_ivec3()
}

/// One cell crossed by a ray, with the distance at which the ray enters it
/// and the face it came through (zero when the ray starts inside the cell).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellHit {
    pub cell: IVec3,
    pub t: f32,
    pub normal: IVec3,
}

/// Regular grid of cubic cells starting at `origin`.
#[derive(Copy, Clone, Debug)]
pub struct VoxelGrid {
    pub origin: Vec3,
    pub cell_size: f32,
    pub dims: UVec3,
}

impl VoxelGrid {
    pub fn new(origin: Vec3, cell_size: f32, dims: UVec3) -> Self {
        Self {
            origin,
            cell_size,
            dims,
        }
    }

    /// Grid of `dims` cells centred on the world origin.
    pub fn centered(cell_size: f32, dims: UVec3) -> Self {
        let origin = -dims.as_vec3() * cell_size * 0.5;
        Self::new(origin, cell_size, dims)
    }

    pub fn bounds(&self) -> AABB {
        AABB::new(self.origin, self.origin + self.dims.as_vec3() * self.cell_size)
    }

    pub fn contains_cell(&self, cell: IVec3) -> bool {
        cell.cmpge(IVec3::ZERO).all() && cell.cmplt(self.dims.as_ivec3()).all()
    }

    pub fn cell_bounds(&self, cell: IVec3) -> AABB {
        let min = self.origin + cell.as_vec3() * self.cell_size;
        AABB::new(min, min + Vec3::splat(self.cell_size))
    }

    pub fn cell_center(&self, cell: IVec3) -> Vec3 {
        self.cell_bounds(cell).center()
    }

    /// Walks the cells pierced by `ray` in order (3D DDA).
    pub fn traverse(&self, ray: &Ray) -> Vec<CellHit> {
        let bounds = self.bounds();
        let dir = ray.dir;

        let (t_enter, normal) = if bounds.contains(ray.origin) {
            (0.0, IVec3::ZERO)
        } else {
            match ray.intersect_aabb(&bounds) {
                Some(t) => (t, entry_normal(ray, &bounds)),
                None => return Vec::new(),
            }
        };

        let last = self.dims.as_ivec3() - IVec3::ONE;
        let mut cell = world_to_cell(ray.at(t_enter), self.origin, self.cell_size).clamp(IVec3::ZERO, last);

        let mut step = [0i32; 3];
        let mut t_max = [f32::INFINITY; 3];
        let mut t_delta = [f32::INFINITY; 3];
        for axis in 0..3 {
            let d = dir[axis];
            if d > 0.0 {
                step[axis] = 1;
                let boundary = self.origin[axis] + (cell[axis] + 1) as f32 * self.cell_size;
                t_max[axis] = (boundary - ray.origin[axis]) / d;
                t_delta[axis] = self.cell_size / d;
            } else if d < 0.0 {
                step[axis] = -1;
                let boundary = self.origin[axis] + cell[axis] as f32 * self.cell_size;
                t_max[axis] = (boundary - ray.origin[axis]) / d;
                t_delta[axis] = -self.cell_size / d;
            }
        }

        let mut hits = vec![CellHit {
            cell,
            t: t_enter,
            normal,
        }];

        loop {
            let axis = if t_max[0] <= t_max[1] && t_max[0] <= t_max[2] {
                0
            } else if t_max[1] <= t_max[2] {
                1
            } else {
                2
            };
            if !t_max[axis].is_finite() {
                break;
            }

            let t = t_max[axis];
            cell[axis] += step[axis];
            t_max[axis] += t_delta[axis];

            if !self.contains_cell(cell) {
                break;
            }

            let mut normal = IVec3::ZERO;
            normal[axis] = -step[axis];
            hits.push(CellHit { cell, t, normal });
        }

        hits
    }
}

/// Outward normal of the box face a ray from outside enters through.
fn entry_normal(ray: &Ray, bounds: &AABB) -> IVec3 {
    let mut best_axis = 0;
    let mut best_t = f32::NEG_INFINITY;
    for axis in 0..3 {
        let d = ray.dir[axis];
        if d == 0.0 {
            continue;
        }
        let face = if d > 0.0 { bounds.min[axis] } else { bounds.max[axis] };
        let t = (face - ray.origin[axis]) / d;
        if t > best_t {
            best_t = t;
            best_axis = axis;
        }
    }

    let mut normal = IVec3::ZERO;
    normal[best_axis] = if ray.dir[best_axis] > 0.0 { -1 } else { 1 };
    normal
}
