use eframe::egui::{Color32, Response, Sense, Ui, Vec2};

use crate::color::Color;
use crate::constants::*;

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// A clickable filled square showing `color`, with its hex code on hover.
pub fn swatch(ui: &mut Ui, color: Color, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::click());

    ui.painter()
        .rect_filled(rect, GUI_SWATCH_ROUNDING, to_color32(color));
    if response.hovered() {
        ui.painter().rect_stroke(
            rect,
            GUI_SWATCH_ROUNDING,
            ui.visuals().widgets.hovered.fg_stroke,
        );
    }

    response.on_hover_text(color.hex())
}
