use druid::{Color, Data};

/// One corner of the triangle, located in polar coordinates around the centroid
#[derive(Clone, Data)]
pub struct TrianglePoint {
    /// Distance from the centroid in logical pixels
    pub length: f64,
    /// Direction angle in degrees, counter-clockwise from the positive x-axis
    pub direction_angle: f64,
    /// Fill color of the vertex marker
    pub color: Color,
}

impl TrianglePoint {
    pub fn new(length: f64, direction_angle: f64, color: Color) -> Self {
        TrianglePoint {
            length,
            direction_angle,
            color,
        }
    }
}
