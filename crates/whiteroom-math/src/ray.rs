use glam::Vec3;

use crate::{AXIS_EPSILON, OrientedBox};

/// Nearest non-negative hit distance of a ray against a sphere.
///
/// `ray_dir` must be normalized. Returns `None` on a miss or when the sphere
/// lies entirely behind the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // Origin inside the sphere.
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(0.0)
}

/// Nearest non-negative hit distance of a ray against an oriented box
/// (slab test in box-local space).
///
/// Returns `Some(0.0)` when the origin is already inside the box.
pub fn ray_obb(ray_origin: Vec3, ray_dir: Vec3, obb: &OrientedBox) -> Option<f32> {
    let o = obb.to_local(ray_origin);
    let d = obb.dir_to_local(ray_dir);
    let h = obb.half_extents;

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        if d[axis].abs() <= AXIS_EPSILON {
            if o[axis] < -h[axis] || o[axis] > h[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d[axis];
        let mut t0 = (-h[axis] - o[axis]) * inv;
        let mut t1 = (h[axis] - o[axis]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(t_min.max(0.0))
}
