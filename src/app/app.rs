use eframe::egui::{
    Align2, CentralPanel, Context, FontId, ScrollArea, Sense, SidePanel, Slider, Ui, Vec2,
};
use eframe::{App as EguiApp, Frame};
use rand::Rng;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::app::hex_input::*;
use crate::app::swatch::*;
use crate::color::Color;
use crate::constants::*;

#[derive(Clone, Copy, PartialEq)]
enum Format {
    Rgb,
    Hex,
    Hsl,
}

impl Format {
    fn text(&self, color: Color) -> String {
        match self {
            Format::Rgb => color.rgb_string(),
            Format::Hex => color.hex(),
            Format::Hsl => color.hsl_string(),
        }
    }
}

pub struct App {
    color: Color,

    hex: HexInputData,
    format: Format,
    copied_at: Option<Instant>,

    saved: Vec<Color>,

    theme: Theme,
    show_info: bool,
}

impl Default for App {
    fn default() -> Self {
        let color = Color::new(14, 165, 233);

        Self {
            color,
            hex: HexInputData::new(color),
            format: Format::Rgb,
            copied_at: None,
            saved: Vec::new(),
            theme: Theme::Dark,
            show_info: false,
        }
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if let Some(copied_at) = self.copied_at {
            let feedback = Duration::from_millis(COPY_FEEDBACK_MS);
            let elapsed = copied_at.elapsed();
            if elapsed >= feedback {
                self.copied_at = None;
            } else {
                ctx.request_repaint_after(feedback - elapsed);
            }
        }

        SidePanel::right("side_panel")
            .exact_width(GUI_SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.side_panel_content(ui);
                });
            });

        CentralPanel::default().show(ctx, |ui| {
            self.central_panel_content(ui);
        });

        ctx.set_visuals(self.theme.visuals());
    }
}

impl App {
    /// Replaces the current color wholesale and keeps the hex field in sync.
    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.hex.text = color.hex();
    }

    fn copy_to_clipboard(&mut self, ctx: &Context, text: String) {
        ctx.copy_text(text);
        // A repeated copy restarts the feedback window.
        self.copied_at = Some(Instant::now());
    }

    pub fn save_palette(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &self.saved)?;
        Ok(())
    }

    pub fn load_palette(&mut self, path: &Path) -> io::Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        self.saved = serde_json::from_reader(reader)?;
        Ok(())
    }

    pub fn central_panel_content(&mut self, ui: &mut Ui) {
        ui.heading("Color Mapper");
        ui.separator();

        self.preview(ui);
        ui.add_space(GUI_PREVIEW_PADDING / 2.0);

        let mut r = self.color.r;
        let mut g = self.color.g;
        let mut b = self.color.b;
        let mut changed = false;
        changed |= ui.add(Slider::new(&mut r, 0..=255).text("Red")).changed();
        changed |= ui.add(Slider::new(&mut g, 0..=255).text("Green")).changed();
        changed |= ui.add(Slider::new(&mut b, 0..=255).text("Blue")).changed();
        if changed {
            self.set_color(Color::new(r, g, b));
        }

        ui.separator();

        ui.horizontal(|ui| {
            ui.radio_value(&mut self.format, Format::Rgb, "RGB");
            ui.radio_value(&mut self.format, Format::Hex, "HEX");
            ui.radio_value(&mut self.format, Format::Hsl, "HSL");
        });

        let text = self.format.text(self.color);
        let label = if self.copied_at.is_some() {
            format!("Copied!  {text}")
        } else {
            format!("Copy  {text}")
        };
        if ui.button(label).clicked() {
            self.copy_to_clipboard(ui.ctx(), text);
        }

        ui.separator();
        ui.heading("Palette");
        self.palette(ui);
    }

    fn preview(&self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(
            Vec2::new(GUI_PREVIEW_WIDTH, GUI_PREVIEW_HEIGHT),
            Sense::hover(),
        );
        let painter = ui.painter();
        painter.rect_filled(rect, GUI_SWATCH_ROUNDING, to_color32(self.color));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            self.color.hex(),
            FontId::monospace(18.0),
            to_color32(self.color.complementary()),
        );
    }

    fn palette(&mut self, ui: &mut Ui) {
        let (first, second) = self.color.analogous();
        let complementary = self.color.complementary();

        let mut picked = None;
        ui.horizontal(|ui| {
            for (label, color) in [
                ("Analogous 1", first),
                ("Primary", self.color),
                ("Analogous 2", second),
                ("Complementary", complementary),
            ] {
                ui.vertical(|ui| {
                    if swatch(ui, color, GUI_SWATCH_SIZE).clicked() {
                        picked = Some(color);
                    }
                    ui.small(label);
                });
            }
        });

        if let Some(color) = picked {
            self.set_color(color);
        }
    }

    pub fn side_panel_content(&mut self, ui: &mut Ui) {
        if ui.button("About").clicked() {
            self.show_info = !self.show_info;
        }
        if self.show_info {
            ui.separator();
            ui.label("A small RGB color picker.");
            ui.label("Move the sliders, copy the result, keep the shades you like.");
        }

        ui.separator();
        ui.heading("Theme");
        ui.radio_value(&mut self.theme, Theme::Light, "Light");
        ui.radio_value(&mut self.theme, Theme::Dark, "Dark");

        ui.separator();
        ui.heading("Hex");
        let mut color = self.color;
        let mut changed = false;
        hex_input(ui, &mut self.hex, &mut color, &mut changed);
        if changed {
            self.set_color(color);
        }

        if ui.button("Random color").clicked() {
            let mut rng = rand::thread_rng();
            self.set_color(Color::new(rng.gen(), rng.gen(), rng.gen()));
        }

        ui.separator();
        ui.heading("Saved colors");
        if ui.button("Add current color").clicked() {
            self.saved.push(self.color);
        }
        if self.saved.is_empty() {
            ui.label("Nothing saved yet");
        }

        let mut picked = None;
        for (i, &saved) in self.saved.iter().enumerate() {
            ui.horizontal(|ui| {
                if swatch(ui, saved, GUI_SWATCH_LIST_SIZE).clicked() {
                    picked = Some(i);
                }
                ui.monospace(saved.hex());
            });
        }
        if let Some(i) = picked {
            self.set_color(self.saved[i]);
        }

        if ui.button("Clear saved colors").clicked() {
            self.saved.clear();
        }

        ui.separator();
        ui.heading("Palette file");
        if ui.button("Save palette").clicked() {
            if let Some(path) = rfd::FileDialog::new().save_file() {
                if let Err(e) = self.save_palette(&path) {
                    eprintln!("Failed to save palette: {}", e);
                }
            }
        }
        if ui.button("Load palette").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_file() {
                if let Err(e) = self.load_palette(&path) {
                    eprintln!("Failed to load palette: {}", e);
                }
            }
        }
    }
}

#[derive(PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn visuals(&self) -> eframe::egui::Visuals {
        match self {
            Theme::Light => eframe::egui::Visuals::light(),
            Theme::Dark => eframe::egui::Visuals::dark(),
        }
    }
}
