use druid::kurbo::Point;
use druid::Color;

/// Fills the whole pixel buffer with a solid color
pub fn fill(pixel_data: &mut [u8], color: Color) {
    let (r, g, b, a) = color.as_rgba8();
    for pixel in pixel_data.chunks_exact_mut(4) {
        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
        pixel[3] = a;
    }
}

/// Draws a filled disc of the given radius centered at `center`
pub fn fill_circle(
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    center: Point,
    radius: f64,
    color: Color,
) {
    stamp_disc(
        pixel_data,
        width,
        height,
        center.x,
        center.y,
        radius,
        color.as_rgba8(),
    );
}

/// Draws a line between two points in the pixel buffer using Bresenham's algorithm.
///
/// A disc of half the stroke width is stamped at every step to give the
/// line its thickness; a stroke width of zero degenerates to a single-pixel line.
pub fn draw_line(
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    from: Point,
    to: Point,
    stroke_width: f64,
    color: Color,
) {
    let rgba = color.as_rgba8();
    let brush = stroke_width / 2.0;
    let (mut x0, mut y0, x1, y1) = (
        from.x.round() as isize,
        from.y.round() as isize,
        to.x.round() as isize,
        to.y.round() as isize,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        stamp_disc(pixel_data, width, height, x0 as f64, y0 as f64, brush, rgba);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Writes every pixel within `radius` of (cx, cy), clipped to the buffer
fn stamp_disc(
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    cx: f64,
    cy: f64,
    radius: f64,
    rgba: (u8, u8, u8, u8),
) {
    let min_x = (cx - radius).floor().max(0.0) as usize;
    let max_x = (cx + radius).ceil().min(width as f64 - 1.0) as usize;
    let min_y = (cy - radius).floor().max(0.0) as usize;
    let max_y = (cy + radius).ceil().min(height as f64 - 1.0) as usize;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= radius * radius {
                let offset = (y * width + x) * 4;
                pixel_data[offset] = rgba.0;
                pixel_data[offset + 1] = rgba.1;
                pixel_data[offset + 2] = rgba.2;
                pixel_data[offset + 3] = rgba.3;
            }
        }
    }
}
