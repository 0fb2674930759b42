use glam::Vec3;

use crate::block::Material;
use crate::coordinates::GridPos;
use crate::store::VoxelStore;

/// World-space view ray. The front end builds one per query from camera
/// state; the finder itself works for any origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Direction is normalized on construction.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetHit {
    pub position: GridPos,
    pub material: Material,
    pub distance: f32,
}

/// Returns the block whose unit cube the ray hits at the smallest
/// non-negative distance, or `None` on a miss. Equal distances resolve to
/// the first block in store iteration order, i.e. the lowest grid
/// position; exact tie semantics are otherwise unspecified.
pub fn find_target(store: &VoxelStore, ray: Ray) -> Option<TargetHit> {
    let mut nearest: Option<TargetHit> = None;
    for block in store.blocks() {
        let min = block.position.min_corner();
        let max = block.position.max_corner();
        let Some(distance) = ray_cube_intersection(ray, min, max) else {
            continue;
        };
        if nearest.is_none_or(|hit| distance < hit.distance) {
            nearest = Some(TargetHit {
                position: block.position,
                material: block.material,
                distance,
            });
        }
    }
    nearest
}

/// Slab-method ray/box test. Returns the entry distance along the ray, or
/// the exit distance when the origin already sits inside the box.
fn ray_cube_intersection(ray: Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = Vec3::new(
        if ray.dir.x.abs() < 1e-6 { f32::MAX } else { 1.0 / ray.dir.x },
        if ray.dir.y.abs() < 1e-6 { f32::MAX } else { 1.0 / ray.dir.y },
        if ray.dir.z.abs() < 1e-6 { f32::MAX } else { 1.0 / ray.dir.z },
    );

    let t1 = (min.x - ray.origin.x) * inv.x;
    let t2 = (max.x - ray.origin.x) * inv.x;
    let t3 = (min.y - ray.origin.y) * inv.y;
    let t4 = (max.y - ray.origin.y) * inv.y;
    let t5 = (min.z - ray.origin.z) * inv.z;
    let t6 = (max.z - ray.origin.z) * inv.z;

    let t_min = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let t_max = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if t_max >= t_min && t_max >= 0.0 {
        Some(if t_min >= 0.0 { t_min } else { t_max })
    } else {
        None
    }
}
