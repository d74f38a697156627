use crate::graphics::{draw_line, fill, fill_circle};
use crate::math;
use crate::state::AppState;
use druid::kurbo::Point;
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{
    commands,
    piet::{InterpolationMode, Text, TextLayout, TextLayoutBuilder},
    Color, RenderContext, Widget,
};
use std::time::Instant;

const BACKGROUND_COLOR: Color = Color::rgb8(255, 255, 255);
const EDGE_COLOR: Color = Color::rgb8(0, 0, 0);
const HIGHLIGHT_COLOR: Color = Color::rgb8(0, 255, 255);
const LABEL_COLOR: Color = Color::rgb8(0, 0, 255);
const DEBUG_TEXT_COLOR: Color = Color::rgb8(80, 80, 80);

/// Edge stroke width in pixels
const EDGE_STROKE_WIDTH: f64 = 8.0;

/// Pointer travel (logical px) past which a press becomes a drag, not a tap
const DRAG_THRESHOLD: f64 = 8.0;

/// Interactive triangle widget
pub struct TriangleWidget {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
    /// Is a left-button press currently being tracked?
    pressed: bool,
    /// Has the tracked press traveled far enough to count as a drag?
    dragging: bool,
    /// Mouse position at the most recent press
    press_position: Point,
    /// Anchor of the in-progress drag gesture
    drag_start_offset: Point,
    /// Running pointer position of the in-progress drag gesture
    current_drag_offset: Point,
    /// Widget size
    size: Size,
}

impl TriangleWidget {
    pub fn new() -> Self {
        TriangleWidget {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
            pressed: false,
            dragging: false,
            press_position: Point::ZERO,
            drag_start_offset: Point::ZERO,
            current_drag_offset: Point::ZERO,
            size: Size::ZERO,
        }
    }

    fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}

impl Widget<AppState> for TriangleWidget {
    /// Handle events for the triangle widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::MouseDown(mouse_event) => {
                if mouse_event.button == druid::MouseButton::Left {
                    self.pressed = true;
                    self.dragging = false;
                    self.press_position = mouse_event.pos;
                    ctx.set_active(true); // Capture mouse events
                }
            }
            Event::MouseMove(mouse_event) => {
                if self.pressed {
                    if !self.dragging
                        && (mouse_event.pos - self.press_position).hypot() > DRAG_THRESHOLD
                    {
                        // The press has become a drag; anchor the gesture
                        // where it began.
                        self.dragging = true;
                        self.drag_start_offset = self.press_position;
                        self.current_drag_offset = self.press_position;
                    }
                    if self.dragging {
                        self.current_drag_offset = mouse_event.pos;

                        let center = self.center();
                        let delta = math::rotation_delta(
                            self.drag_start_offset - center,
                            self.current_drag_offset - center,
                        );
                        data.rotate(delta);

                        // Advance the anchor so the next sample measures only
                        // the marginal rotation.
                        self.drag_start_offset = self.current_drag_offset;
                    }
                }
            }
            Event::MouseUp(mouse_event) => {
                if mouse_event.button == druid::MouseButton::Left && self.pressed {
                    if !self.dragging {
                        data.tap(mouse_event.pos - self.center());
                    }
                    self.pressed = false;
                    self.dragging = false;
                    ctx.set_active(false);
                }
            }
            Event::KeyDown(key_event) => {
                if let druid::keyboard_types::Key::Character(s) = &key_event.key {
                    match s.as_str() {
                        "d" | "D" => {
                            data.debug = !data.debug;
                        }
                        "r" | "R" => {
                            data.reset();
                            log::info!("model reset to initial configuration");
                        }
                        "q" | "Q" => {
                            // Submit the QUIT_APP command to exit the application
                            ctx.submit_command(commands::QUIT_APP);
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
        match event {
            LifeCycle::BuildFocusChain => ctx.register_for_focus(),
            LifeCycle::Size(size) => self.size = *size,
            _ => {}
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &AppState, data: &AppState, _env: &Env) {
        if !old_data.same(data) {
            ctx.request_paint();
        }
    }

    /// Determines the layout constraints for the triangle widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        let size = bc.max();
        self.size = size;
        size
    }

    /// Paint the triangle widget
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let size = ctx.size();
        let width = size.width as usize;
        let height = size.height as usize;
        if width == 0 || height == 0 {
            return;
        }

        // Create and clear the pixel buffer
        let mut pixel_data = vec![0u8; width * height * 4];
        fill(&mut pixel_data, BACKGROUND_COLOR);

        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let positions = data.vertex_positions().map(|offset| center + offset);

        // Draw edges; edge i connects vertex i and vertex i + 1 and is
        // highlighted when either endpoint is the selected vertex.
        for i in 0..3 {
            let next = (i + 1) % 3;
            let highlighted =
                data.selected_point == Some(i) || data.selected_point == Some(next);
            draw_line(
                &mut pixel_data,
                width,
                height,
                positions[i],
                positions[next],
                EDGE_STROKE_WIDTH,
                if highlighted { HIGHLIGHT_COLOR } else { EDGE_COLOR },
            );
        }

        // Draw vertex markers
        for (i, point) in data.points.iter().enumerate() {
            let color = if data.selected_point == Some(i) {
                HIGHLIGHT_COLOR
            } else {
                point.color.clone()
            };
            fill_circle(
                &mut pixel_data,
                width,
                height,
                positions[i],
                data.vertex_radius,
                color,
            );
        }

        // Create and draw the image
        let image = ctx
            .make_image(
                width,
                height,
                &pixel_data,
                druid::piet::ImageFormat::RgbaSeparate,
            )
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);

        // Per-vertex labels: direction angle and interior angle
        for (i, point) in data.points.iter().enumerate() {
            let text = format!(
                "➤ {:.1}°, ∠ {:.1}°",
                point.direction_angle, data.interior_angles[i]
            );
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 13.0)
                .text_color(LABEL_COLOR)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, positions[i]);
        }

        // Add debug info if debug mode is enabled
        if data.debug {
            let text = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(DEBUG_TEXT_COLOR)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 10.0));

            // Draw selection and rotation state
            let text = format!(
                "Selected: {}, Rotation: {:.1}°",
                data.selected_point.map_or(-1, |index| index as i64),
                data.rotation_angle
            );
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(DEBUG_TEXT_COLOR)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 30.0));

            // Draw FPS
            let text = format!("FPS: {:.2}", self.fps);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(DEBUG_TEXT_COLOR)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 50.0));
        }
    }
}
