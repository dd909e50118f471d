mod app;
mod color;
mod constants;

use app::App;
use constants::*;
use eframe::egui::{Vec2, ViewportBuilder};
use eframe::{run_native, NativeOptions, Result};

fn main() -> Result {
    let title = "Color Mapper";

    let width = GUI_PREVIEW_WIDTH + GUI_SIDEBAR_WIDTH + GUI_PREVIEW_PADDING * 2.0;
    let height = GUI_WINDOW_HEIGHT;

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(width, height)),
            resizable: Some(false),
            maximize_button: Some(false),
            minimize_button: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::<App>::default())),
    )
}
