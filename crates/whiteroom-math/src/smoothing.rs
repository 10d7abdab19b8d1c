/// Linear interpolation `a + (b - a) * t`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend factor for frame-time-scaled easing: `1 - remaining^dt`.
///
/// `remaining` is the fraction of the gap left after one second, so
/// `decay_alpha(0.001, dt)` closes 99.9% of the distance per second
/// regardless of how that second is sliced into frames.
#[inline]
pub fn decay_alpha(remaining: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    (1.0 - remaining.clamp(0.0, 1.0).powf(dt)).clamp(0.0, 1.0)
}
