// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint angle geometry.

use crate::keypoint::Point;

/// Calculate the interior angle at `vertex` formed by the rays to `a` and `c`.
///
/// The direction of each ray is measured with `atan2`, and the absolute difference is
/// folded back into `[0, 180]` so the non-reflex angle is returned regardless of
/// whether the points wind clockwise or counter-clockwise.
///
/// No validation is performed. If `a` or `c` coincides with `vertex` the ray direction
/// falls back to the `atan2(0, 0) = 0` convention.
///
/// # Arguments
///
/// * `a` - End point of the first ray.
/// * `vertex` - Pivot point.
/// * `c` - End point of the second ray.
///
/// # Returns
///
/// Angle in degrees between 0.0 and 180.0
#[must_use]
pub fn interior_angle(a: Point, vertex: Point, c: Point) -> f32 {
    let to_c = (c.y - vertex.y).atan2(c.x - vertex.x);
    let to_a = (a.y - vertex.y).atan2(a.x - vertex.x);

    let angle = (to_c - to_a).to_degrees().abs();
    if angle > 180.0 { 360.0 - angle } else { angle }
}
