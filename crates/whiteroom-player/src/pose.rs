use glam::{Mat4, Vec2, Vec3, Vec4};

/// Near/far planes used for pointer rays.
const NEAR: f32 = 0.1;
const FAR: f32 = 200.0;

/// Camera eye and look-at point for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    /// Right-handed view matrix with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, fov_y: f32, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(fov_y, aspect, NEAR, FAR)
    }

    /// World-space ray through a cursor position.
    ///
    /// `cursor` is in window pixels with the origin at the top-left,
    /// `viewport` is the window size in the same units. Returns
    /// `(origin, direction)` with a normalized direction, or `None` for an
    /// empty viewport or a degenerate pose.
    pub fn screen_ray(&self, cursor: Vec2, viewport: Vec2, fov_y: f32) -> Option<(Vec3, Vec3)> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 || !cursor.is_finite() {
            return None;
        }
        let ndc_x = (2.0 * cursor.x / viewport.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * cursor.y / viewport.y);
        let aspect = viewport.x / viewport.y;
        let inv = (self.projection_matrix(fov_y, aspect) * self.view_matrix()).inverse();
        // Near plane (depth 0 in a [0, 1] projection).
        let p_near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        if p_near.w.abs() <= f32::EPSILON {
            return None;
        }
        let p0 = p_near.truncate() / p_near.w;
        let dir = (p0 - self.position).try_normalize()?;
        dir.is_finite().then_some((self.position, dir))
    }
}
