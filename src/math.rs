use druid::kurbo::Vec2;

/// Projects a vertex onto the canvas as a centroid-relative offset.
///
/// Angles are in degrees, counter-clockwise from the positive x-axis; the
/// y component is negated because screen y grows downward.
pub fn vertex_position(direction_angle: f64, length: f64) -> Vec2 {
    let radians = direction_angle.to_radians();
    Vec2::new(radians.cos() * length, -radians.sin() * length)
}

/// Angle in degrees of a centroid-relative pointer offset, y inverted
pub fn pointer_angle(offset: Vec2) -> f64 {
    (-offset.y).atan2(offset.x).to_degrees()
}

/// Computes the marginal rotation (degrees) between two pointer offsets.
///
/// The raw difference of two atan2 results jumps by ~360° when the pointer
/// crosses the ±180° seam; the result is wrapped to the shortest arc so a
/// single seam-crossing sample cannot cancel a whole revolution.
pub fn rotation_delta(anchor: Vec2, current: Vec2) -> f64 {
    let delta = pointer_angle(current) - pointer_angle(anchor);
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Interior angle (degrees) at `at` between its two neighbors.
///
/// Returns `None` when either neighbor coincides with `at`; the cosine is
/// clamped to [-1, 1] before `acos` to stay inside its domain.
pub fn interior_angle(at: Vec2, prev: Vec2, next: Vec2) -> Option<f64> {
    let v1 = prev - at;
    let v2 = next - at;
    let mag1 = v1.hypot();
    let mag2 = v2.hypot();
    if mag1 == 0.0 || mag2 == 0.0 {
        return None;
    }
    let cosine = (v1.dot(v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}
