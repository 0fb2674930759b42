use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Integer voxel coordinate. The cube at a grid position spans one unit
/// along each axis from its corner, `[x, x+1] × [y, y+1] × [z, z+1]`.
/// Ordered so that store iteration is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Corner of the unit cube with the smallest coordinates.
    pub fn min_corner(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Corner of the unit cube with the largest coordinates.
    pub fn max_corner(self) -> Vec3 {
        self.min_corner() + Vec3::ONE
    }

    /// World-space center of the unit cube.
    pub fn center(self) -> Vec3 {
        self.min_corner() + Vec3::splat(0.5)
    }
}
