use egui::Color32;

pub const ACCENT: &str = "#3BF4C7";
pub const BUTTON: &str = "#3B9CD4";
pub const SUCCESS: &str = "#7BE495";
pub const FAILURE: &str = "#F08080";

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;

    /// Like `from_hex`, but falls back to gray for malformed input.
    fn hex_or_gray(hex: &str) -> Self
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }

    fn hex_or_gray(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Color32::GRAY)
    }
}
