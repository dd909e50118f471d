use eframe::egui::{TextEdit, Ui};

use crate::color::Color;
use crate::constants::*;

pub struct HexInputData {
    pub text: String,
}

impl HexInputData {
    pub fn new(color: Color) -> Self {
        Self { text: color.hex() }
    }
}

/// Editable `#rrggbb` field with an apply button. On bad input the field
/// itself reports the failure instead of touching the color.
pub fn hex_input(ui: &mut Ui, data: &mut HexInputData, color: &mut Color, changed: &mut bool) {
    ui.horizontal(|ui| {
        ui.add(TextEdit::singleline(&mut data.text)
            .desired_width(GUI_HEX_INPUT_WIDTH));

        if ui.button("Apply").clicked() {
            match Color::from_hex(&data.text) {
                Some(parsed) => {
                    *color = parsed;
                    data.text = parsed.hex();
                    *changed = true;
                }
                None => {
                    data.text = "Invalid!".to_string();
                }
            }
        }
    });
}
