use glam::Vec3;

/// Ray direction components at or below this magnitude are treated as parallel
/// to the corresponding slab and excluded from [`RoomBounds::exit_fraction`].
pub const AXIS_EPSILON: f32 = 1e-6;

/// Axis-aligned box in world space, used for the walkable square and the
/// camera's interior volume.
///
/// Invariant: min.x <= max.x, min.y <= max.y, min.z <= max.z.
/// The constructor enforces this by swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl RoomBounds {
    /// Create bounds from two corners. Components are sorted so that
    /// min <= max on every axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create bounds from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Clamp `p` into the bounds on the x and z axes only. The y component is
    /// passed through untouched.
    pub fn clamp_xz(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y,
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Fraction along `anchor + dir * t` at which the segment first crosses a
    /// face of the bounds, capped at 1.0.
    ///
    /// For every axis with a non-negligible direction component the crossing
    /// against the face the ray is heading toward is computed; the minimum over
    /// those axes wins. Axes with `|dir| <= AXIS_EPSILON` impose no constraint.
    /// A non-finite result falls back to `0.0` so callers never propagate NaN
    /// into a transform.
    pub fn exit_fraction(&self, anchor: Vec3, dir: Vec3) -> f32 {
        let mut t = 1.0_f32;
        for axis in 0..3 {
            let d = dir[axis];
            if d.abs() <= AXIS_EPSILON {
                continue;
            }
            let bound = if d > 0.0 {
                self.max[axis]
            } else {
                self.min[axis]
            };
            let crossing = (bound - anchor[axis]) / d;
            if !crossing.is_finite() {
                return 0.0;
            }
            t = t.min(crossing);
        }
        t
    }

    /// Returns a copy shrunk by `margin` on every x/z face. The vertical range
    /// is left as is.
    pub fn inset_xz(&self, margin: f32) -> Self {
        Self::new(
            Vec3::new(self.min.x + margin, self.min.y, self.min.z + margin),
            Vec3::new(self.max.x - margin, self.max.y, self.max.z - margin),
        )
    }

    /// Returns the size along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_room() -> RoomBounds {
        RoomBounds::new(Vec3::new(-10.0, 0.0, -10.0), Vec3::new(10.0, 5.0, 10.0))
    }

    #[test]
    fn test_constructor_auto_sorts() {
        let b = RoomBounds::new(Vec3::new(3.0, 4.0, 5.0), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(b.max, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_contains_point_on_edge() {
        let b = unit_room();
        assert!(b.contains_point(Vec3::new(10.0, 5.0, -10.0)));
        assert!(b.contains_point(Vec3::ZERO));
        assert!(!b.contains_point(Vec3::new(10.01, 1.0, 0.0)));
    }

    #[test]
    fn test_clamp_xz_leaves_height() {
        let b = unit_room();
        let p = b.clamp_xz(Vec3::new(50.0, 99.0, -50.0));
        assert_eq!(p, Vec3::new(10.0, 99.0, -10.0));
    }

    #[test]
    fn test_exit_fraction_inside_is_one() {
        let b = unit_room();
        let t = b.exit_fraction(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 1.0, 2.0));
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_exit_fraction_hits_nearest_face() {
        let b = unit_room();
        // x reaches the wall at half the segment, z would reach it later.
        let t = b.exit_fraction(Vec3::ZERO, Vec3::new(20.0, 0.0, 12.0));
        assert!((t - 0.5).abs() < 1e-6, "got {t}");
    }

    #[test]
    fn test_exit_fraction_negative_direction_uses_min_face() {
        let b = unit_room();
        let t = b.exit_fraction(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -4.0, 0.0));
        assert!((t - 0.5).abs() < 1e-6, "got {t}");
    }

    #[test]
    fn test_exit_fraction_ignores_parallel_axes() {
        let b = unit_room();
        let t = b.exit_fraction(Vec3::ZERO, Vec3::new(0.0, 0.0, 40.0));
        assert!((t - 0.25).abs() < 1e-6, "got {t}");
    }

    #[test]
    fn test_exit_fraction_zero_direction_is_unconstrained() {
        let b = unit_room();
        let t = b.exit_fraction(Vec3::ZERO, Vec3::ZERO);
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_exit_fraction_non_finite_falls_back_to_zero() {
        let b = unit_room();
        let t = b.exit_fraction(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_inset_xz() {
        let b = unit_room().inset_xz(1.5);
        assert_eq!(b.min, Vec3::new(-8.5, 0.0, -8.5));
        assert_eq!(b.max, Vec3::new(8.5, 5.0, 8.5));
    }

    #[test]
    fn test_size_and_center() {
        let b = RoomBounds::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(2.0));
        assert_eq!(b.size(), Vec3::splat(4.0));
        assert_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
    }
}
