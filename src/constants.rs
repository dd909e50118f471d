pub const GUI_PREVIEW_WIDTH: f32 = 360.0;
pub const GUI_PREVIEW_HEIGHT: f32 = 160.0;
pub const GUI_PREVIEW_PADDING: f32 = 16.0;
pub const GUI_SIDEBAR_WIDTH: f32 = 220.0;
pub const GUI_WINDOW_HEIGHT: f32 = 560.0;

pub const GUI_SWATCH_SIZE: f32 = 56.0;
pub const GUI_SWATCH_LIST_SIZE: f32 = 20.0;
pub const GUI_SWATCH_ROUNDING: f32 = 4.0;
pub const GUI_HEX_INPUT_WIDTH: f32 = 90.0;

pub const COPY_FEEDBACK_MS: u64 = 2000;
