mod graphics;
mod math;
mod state;
mod vertex;
mod widget;

use clap::Parser;
use druid::widget::{CrossAxisAlignment, Flex, Label};
use druid::{AppLauncher, Env, LocalizedString, PlatformError, Widget, WidgetExt, WindowDesc};

use crate::state::AppState;
use crate::widget::TriangleWidget;

/// Command-line options
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 480.0)]
    width: f64,
    /// Window height in logical pixels
    #[arg(long, default_value_t = 520.0)]
    height: f64,
    /// Vertex distance from the centroid in pixels
    #[arg(long, default_value_t = 108.0)]
    length: f64,
    /// Vertex marker radius in pixels
    #[arg(long, default_value_t = 24.0)]
    radius: f64,
}

/// Builds the root widget: the status line above the triangle canvas
fn build_root() -> impl Widget<AppState> {
    let status = Label::new(|data: &AppState, _env: &Env| data.status_line())
        .with_text_size(14.0)
        .padding(8.0);

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(status)
        .with_flex_child(TriangleWidget::new(), 1.0)
}

/// Main function
pub fn main() -> Result<(), PlatformError> {
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "starting {} {} ({}x{} window, length {}, radius {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        args.width,
        args.height,
        args.length,
        args.radius
    );

    let main_window = WindowDesc::new(build_root())
        .title(LocalizedString::new("Interactive Triangle"))
        .window_size((args.width, args.height));

    AppLauncher::with_window(main_window).launch(AppState::new(args.length, args.radius))?;

    Ok(())
}
