/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const NIGHT:  Self = Self { r: 0.059, g: 0.067, b: 0.082, a: 1.0 }; // #0f1115
    pub const SNOW:   Self = Self { r: 0.949, g: 0.957, b: 0.973, a: 1.0 }; // #f2f4f8
    pub const SLATE:  Self = Self { r: 0.545, g: 0.576, b: 0.655, a: 1.0 }; // #8b93a7
    pub const CARD:   Self = Self { r: 0.102, g: 0.114, b: 0.141, a: 1.0 }; // #1a1d24
    pub const BLUE:   Self = Self { r: 0.231, g: 0.510, b: 0.965, a: 1.0 }; // #3b82f6
    pub const CYAN:   Self = Self { r: 0.133, g: 0.827, b: 0.933, a: 1.0 }; // #22d3ee
    pub const RED:    Self = Self { r: 0.937, g: 0.267, b: 0.267, a: 1.0 }; // #ef4444
    pub const ORANGE: Self = Self { r: 0.976, g: 0.451, b: 0.086, a: 1.0 }; // #f97316
    pub const YELLOW: Self = Self { r: 0.918, g: 0.702, b: 0.031, a: 1.0 }; // #eab308
    pub const GREEN:  Self = Self { r: 0.133, g: 0.773, b: 0.369, a: 1.0 }; // #22c55e
    pub const WHITE:  Self = Self { r: 1.0,   g: 1.0,   b: 1.0,   a: 1.0 };
    pub const BLACK:  Self = Self { r: 0.0,   g: 0.0,   b: 0.0,   a: 1.0 };

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<f32> {
            u8::from_str_radix(s, 16).ok().map(|b| b as f32 / 255.0)
        };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.0, 1.0));

        let c = Color::from_hex("00ff0080").unwrap();
        assert_eq!(c.g, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#fff").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::BLUE.with_alpha(3.0).a, 1.0);
        assert_eq!(Color::BLUE.with_alpha(-1.0).a, 0.0);
    }
}
