// Math utilities and helper functions

use glam::Vec3;

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep on [0, 1]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Round a value to the nearest multiple of `cell`
pub fn snap_to_grid(value: f32, cell: f32) -> f32 {
    (value / cell).round() * cell
}

/// Check whether every component of `v` is a multiple of `cell` (within `epsilon`)
pub fn is_grid_aligned(v: Vec3, cell: f32, epsilon: f32) -> bool {
    v.to_array()
        .iter()
        .all(|&c| approx_equal(c, snap_to_grid(c, cell), epsilon))
}
