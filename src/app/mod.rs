mod app;
pub mod hex_input;
pub mod swatch;

pub use app::App;
