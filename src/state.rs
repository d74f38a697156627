use druid::kurbo::Vec2;
use druid::{Color, Data};

use crate::math;
use crate::vertex::TrianglePoint;

/// Direction angles (degrees) of the three vertices at startup
pub const INITIAL_DIRECTION_ANGLES: [f64; 3] = [90.0, 210.0, 330.0];

/// Marker fill colors, one per vertex
const POINT_COLORS: [Color; 3] = [
    Color::rgb8(255, 0, 0),
    Color::rgb8(0, 255, 0),
    Color::rgb8(255, 0, 255),
];

/// Taps within this multiple of the marker radius count as a hit
const HIT_RADIUS_FACTOR: f64 = 1.5;

/// Application state
///
/// Holds the durable interaction model: the three vertices, the selection,
/// the rotation accumulator and the derived interior angles. Transient
/// gesture tracking lives on the widget, not here.
#[derive(Clone, Data)]
pub struct AppState {
    /// The three triangle vertices, in cyclic order
    pub points: [TrianglePoint; 3],
    /// Index of the currently selected vertex, if any
    pub selected_point: Option<usize>,
    /// Live rotation angle (degrees) applied to the selected vertex; unbounded
    pub rotation_angle: f64,
    /// Interior angle (degrees) at each vertex, refreshed after every mutation
    pub interior_angles: [f64; 3],
    /// Vertex marker radius in logical pixels
    pub vertex_radius: f64,
    /// Enable the debug overlay
    pub debug: bool,
}

impl AppState {
    pub fn new(length: f64, vertex_radius: f64) -> Self {
        let mut state = AppState {
            points: std::array::from_fn(|i| {
                TrianglePoint::new(length, INITIAL_DIRECTION_ANGLES[i], POINT_COLORS[i].clone())
            }),
            selected_point: None,
            rotation_angle: INITIAL_DIRECTION_ANGLES[0],
            interior_angles: [60.0; 3],
            vertex_radius,
            debug: false,
        };
        state.update_interior_angles();
        state
    }

    /// Centroid-relative position of every vertex, projected from its angle
    pub fn vertex_positions(&self) -> [Vec2; 3] {
        std::array::from_fn(|i| {
            let point = &self.points[i];
            math::vertex_position(point.direction_angle, point.length)
        })
    }

    /// Handles a tap at a centroid-relative offset.
    ///
    /// The first vertex in index order within range wins, even when markers
    /// overlap. A hit re-anchors the rotation accumulator to the vertex's
    /// current angle, then toggles the selection: tapping the selected
    /// vertex deselects it, any other hit selects the tapped one. A miss
    /// leaves the selection unchanged.
    pub fn tap(&mut self, offset: Vec2) {
        for (index, point) in self.points.iter().enumerate() {
            let position = math::vertex_position(point.direction_angle, point.length);
            if (position - offset).hypot() < self.vertex_radius * HIT_RADIUS_FACTOR {
                self.rotation_angle = point.direction_angle;
                self.selected_point = if self.selected_point == Some(index) {
                    None
                } else {
                    Some(index)
                };
                log::debug!(
                    "tap hit vertex {}, selection is now {:?}",
                    index,
                    self.selected_point
                );
                return;
            }
        }
    }

    /// Applies a marginal drag rotation in degrees.
    ///
    /// The accumulator always advances; only a selected vertex follows it.
    pub fn rotate(&mut self, delta_degrees: f64) {
        self.rotation_angle += delta_degrees;
        if let Some(index) = self.selected_point {
            self.points[index].direction_angle = self.rotation_angle;
            self.update_interior_angles();
        }
    }

    /// Restores the startup configuration, keeping the debug overlay toggle
    pub fn reset(&mut self) {
        let mut state = AppState::new(self.points[0].length, self.vertex_radius);
        state.debug = self.debug;
        *self = state;
    }

    /// Recomputes the interior angle at each vertex from current positions.
    ///
    /// A vertex with a coincident neighbor keeps its previous value.
    fn update_interior_angles(&mut self) {
        let positions = self.vertex_positions();
        for i in 0..3 {
            let prev = positions[(i + 2) % 3];
            let next = positions[(i + 1) % 3];
            if let Some(angle) = math::interior_angle(positions[i], prev, next) {
                self.interior_angles[i] = angle;
            }
        }
    }

    /// The status line shown above the canvas
    pub fn status_line(&self) -> String {
        let selected = self.selected_point.map_or(-1, |index| index as i64);
        let sum: f64 = self.interior_angles.iter().sum();
        format!(
            "Selected Point Index: {}\nRotation Angle: {:.1}°\nInterior Angles: ({:.1} + {:.1} + {:.1}) = {:.1}°",
            selected,
            self.rotation_angle,
            self.interior_angles[0],
            self.interior_angles[1],
            self.interior_angles[2],
            sum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LENGTH: f64 = 108.0;
    const RADIUS: f64 = 24.0;

    fn state() -> AppState {
        AppState::new(LENGTH, RADIUS)
    }

    /// Centroid-relative position of vertex `index` in the current state
    fn position_of(state: &AppState, index: usize) -> Vec2 {
        state.vertex_positions()[index]
    }

    #[test]
    fn equilateral_start_has_sixty_degree_corners() {
        let state = state();
        for angle in state.interior_angles {
            assert_relative_eq!(angle, 60.0, epsilon = 0.01);
        }
        let sum: f64 = state.interior_angles.iter().sum();
        assert_relative_eq!(sum, 180.0, epsilon = 0.01);
    }

    #[test]
    fn angle_sum_stays_at_180_after_rotation() {
        let mut state = state();
        state.tap(position_of(&state, 0));
        state.rotate(37.3);
        let sum: f64 = state.interior_angles.iter().sum();
        assert_relative_eq!(sum, 180.0, epsilon = 0.01);
    }

    #[test]
    fn tap_selects_then_deselects() {
        let mut state = state();
        let target = position_of(&state, 1);

        state.tap(target);
        assert_eq!(state.selected_point, Some(1));

        state.tap(target);
        assert_eq!(state.selected_point, None);
    }

    #[test]
    fn tap_switches_between_vertices() {
        let mut state = state();
        state.tap(position_of(&state, 0));
        assert_eq!(state.selected_point, Some(0));

        state.tap(position_of(&state, 2));
        assert_eq!(state.selected_point, Some(2));
    }

    #[test]
    fn tap_miss_leaves_selection_unchanged() {
        let mut state = state();
        state.tap(Vec2::ZERO);
        assert_eq!(state.selected_point, None);

        state.tap(position_of(&state, 0));
        state.tap(Vec2::ZERO);
        assert_eq!(state.selected_point, Some(0));
    }

    #[test]
    fn tap_hit_re_anchors_rotation_angle() {
        let mut state = state();
        state.tap(position_of(&state, 0));
        assert_relative_eq!(state.rotation_angle, 90.0);

        state.rotate(30.0);
        assert_relative_eq!(state.rotation_angle, 120.0);
        assert_relative_eq!(state.points[0].direction_angle, 120.0);

        state.tap(position_of(&state, 1));
        assert_relative_eq!(state.rotation_angle, 210.0);
    }

    #[test]
    fn hit_test_uses_one_and_a_half_marker_radii() {
        let mut state = state();
        let threshold = RADIUS * 1.5;
        let target = position_of(&state, 0);

        state.tap(target + Vec2::new(threshold + 0.1, 0.0));
        assert_eq!(state.selected_point, None);

        state.tap(target + Vec2::new(threshold - 0.1, 0.0));
        assert_eq!(state.selected_point, Some(0));
    }

    #[test]
    fn first_vertex_in_index_order_wins_when_markers_overlap() {
        let mut state = state();
        // Park vertex 1 on top of vertex 0.
        state.tap(position_of(&state, 1));
        state.rotate(-120.0);
        assert_relative_eq!(state.points[1].direction_angle, 90.0);

        state.tap(position_of(&state, 0));
        assert_eq!(state.selected_point, Some(0));
    }

    #[test]
    fn full_revolution_accumulates_360_degrees() {
        let mut state = state();
        state.tap(position_of(&state, 0));

        for step in 0..36 {
            let anchor = math::vertex_position(90.0 + 10.0 * step as f64, 100.0);
            let current = math::vertex_position(90.0 + 10.0 * (step + 1) as f64, 100.0);
            state.rotate(math::rotation_delta(anchor, current));
        }

        assert_relative_eq!(state.rotation_angle, 450.0, epsilon = 1e-6);
        // Net displacement is zero modulo 360°.
        let position = position_of(&state, 0);
        assert_relative_eq!(position.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(position.y, -LENGTH, epsilon = 1e-6);
    }

    #[test]
    fn unselected_rotation_moves_nothing() {
        let mut state = state();
        let before = state.vertex_positions();

        state.rotate(45.0);
        assert_relative_eq!(state.rotation_angle, 135.0);

        let after = state.vertex_positions();
        for i in 0..3 {
            assert_relative_eq!(after[i].x, before[i].x);
            assert_relative_eq!(after[i].y, before[i].y);
        }
    }

    #[test]
    fn coincident_vertices_keep_stale_interior_angles() {
        let mut state = state();
        state.tap(position_of(&state, 1));
        // Rotate vertex 1 onto vertex 0; both now project to the same point.
        state.rotate(-120.0);

        assert_relative_eq!(state.interior_angles[0], 60.0);
        assert_relative_eq!(state.interior_angles[1], 60.0);
        assert_relative_eq!(state.interior_angles[2], 0.0, epsilon = 0.01);
        assert!(state.interior_angles.iter().all(|angle| angle.is_finite()));
    }

    #[test]
    fn status_line_matches_display_format() {
        let state = state();
        assert_eq!(
            state.status_line(),
            "Selected Point Index: -1\nRotation Angle: 90.0°\nInterior Angles: (60.0 + 60.0 + 60.0) = 180.0°"
        );
    }
}
