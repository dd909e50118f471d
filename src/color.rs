use serde::{Deserialize, Serialize};

/// An sRGB triple. The `u8` channels make out-of-range values
/// unrepresentable, so every `Color` satisfies [0, 255] by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// RGB to HSL via the normalized-channel algorithm. Achromatic input
    /// (max == min) gets hue 0 and saturation 0 by convention.
    pub fn hsl_string(&self) -> String {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        format!(
            "hsl({}, {}%, {}%)",
            (h * 360.0).round() as u32,
            (s * 100.0).round() as u32,
            (l * 100.0).round() as u32
        )
    }

    pub fn complementary(&self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }

    /// Two hue-adjacent companions, shifted by 30 on two channels in
    /// opposite directions and clamped to the channel range. This is a
    /// deliberate channel-space approximation, not an HSL rotation.
    pub fn analogous(&self) -> (Self, Self) {
        (
            Self {
                r: shift(self.r, 30),
                g: shift(self.g, -30),
                b: shift(self.b, -30),
            },
            Self {
                r: shift(self.r, -30),
                g: shift(self.g, 30),
                b: shift(self.b, 30),
            },
        )
    }
}

fn shift(channel: u8, delta: i16) -> u8 {
    (channel as i16 + delta).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(Color::new(14, 165, 233).hex(), "#0ea5e9");
        assert_eq!(Color::new(0, 0, 5).hex(), "#000005");
        assert_eq!(Color::new(255, 255, 255).hex(), "#ffffff");
    }

    #[test]
    fn rgb_string_format() {
        assert_eq!(Color::new(14, 165, 233).rgb_string(), "rgb(14, 165, 233)");
        assert_eq!(Color::new(0, 0, 0).rgb_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn hsl_achromatic() {
        assert_eq!(Color::new(0, 0, 0).hsl_string(), "hsl(0, 0%, 0%)");
        assert_eq!(Color::new(255, 255, 255).hsl_string(), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::new(255, 0, 0).hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(Color::new(0, 255, 0).hsl_string(), "hsl(120, 100%, 50%)");
        assert_eq!(Color::new(0, 0, 255).hsl_string(), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn complementary_inverts_channels() {
        assert_eq!(
            Color::new(14, 165, 233).complementary(),
            Color::new(241, 90, 22)
        );
    }

    #[test]
    fn complementary_is_an_involution() {
        for c in [
            Color::new(0, 0, 0),
            Color::new(255, 255, 255),
            Color::new(14, 165, 233),
            Color::new(1, 128, 254),
        ] {
            assert_eq!(c.complementary().complementary(), c);
        }
    }

    #[test]
    fn analogous_shifts_and_clamps() {
        let (first, second) = Color::new(14, 165, 233).analogous();
        assert_eq!(first, Color::new(44, 135, 203));
        // 233 + 30 exceeds the range and clamps to 255, 14 - 30 to 0.
        assert_eq!(second, Color::new(0, 195, 255));
    }

    #[test]
    fn analogous_clamps_at_both_extremes() {
        let (first, second) = Color::new(0, 0, 0).analogous();
        assert_eq!(first, Color::new(30, 0, 0));
        assert_eq!(second, Color::new(0, 30, 30));

        let (first, second) = Color::new(255, 255, 255).analogous();
        assert_eq!(first, Color::new(255, 225, 225));
        assert_eq!(second, Color::new(225, 255, 255));
    }

    #[test]
    fn from_hex_accepts_both_cases_and_optional_hash() {
        assert_eq!(Color::from_hex("#0ea5e9"), Some(Color::new(14, 165, 233)));
        assert_eq!(Color::from_hex("0EA5E9"), Some(Color::new(14, 165, 233)));
        assert_eq!(Color::from_hex(" #ffffff "), Some(Color::new(255, 255, 255)));
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#0ea5e9ff"), None);
    }

    #[test]
    fn hex_round_trips_through_from_hex() {
        let c = Color::new(14, 165, 233);
        assert_eq!(Color::from_hex(&c.hex()), Some(c));
    }
}
