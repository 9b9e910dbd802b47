mod aabb;
mod color;
mod grid;
mod ray;
mod spherical;

pub use aabb::AABB;
pub use color::hsv_to_rgb;
pub use grid::{world_to_cell, CellHit, VoxelGrid};
pub use ray::Ray;
pub use spherical::{pivot, Spherical, POLE_EPSILON};
