pub mod colors;
pub mod style;

pub use colors::Color;

use powerai_config::{ThemeConfig, MIN_FONT_SIZE};
use powerai_core::Severity;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:    Color,
    pub foreground:    Color,
    pub muted:         Color,
    pub card:          Color,
    pub primary:       Color,
    pub accent:        Color,
    pub destructive:   Color,
    pub red:           Color,
    pub orange:        Color,
    pub yellow:        Color,
    pub green:         Color,
    pub font_size:     f32,
    pub border_radius: f32,
    pub padding:       u16,
    pub gap:           u16,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background:    Color::from_hex(&cfg.background).unwrap_or(Color::NIGHT),
            foreground:    Color::from_hex(&cfg.foreground).unwrap_or(Color::SNOW),
            muted:         Color::from_hex(&cfg.muted).unwrap_or(Color::SLATE),
            card:          Color::from_hex(&cfg.card).unwrap_or(Color::CARD),
            primary:       Color::from_hex(&cfg.primary).unwrap_or(Color::BLUE),
            accent:        Color::from_hex(&cfg.accent).unwrap_or(Color::CYAN),
            destructive:   Color::from_hex(&cfg.destructive).unwrap_or(Color::RED),
            red:           Color::from_hex(&cfg.red).unwrap_or(Color::RED),
            orange:        Color::from_hex(&cfg.orange).unwrap_or(Color::ORANGE),
            yellow:        Color::from_hex(&cfg.yellow).unwrap_or(Color::YELLOW),
            green:         Color::from_hex(&cfg.green).unwrap_or(Color::GREEN),
            font_size:     cfg.font_size.max(MIN_FONT_SIZE),
            border_radius: cfg.border_radius,
            padding:       cfg.padding,
            gap:           cfg.gap,
        }
    }

    /// Colour of a severity tier.
    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Red    => self.red,
            Severity::Orange => self.orange,
            Severity::Yellow => self.yellow,
            Severity::Green  => self.green,
        }
    }

    /// Caption / small-print size.
    pub fn caption_size(&self) -> f32 {
        self.font_size - 2.0
    }

    /// Card title size.
    pub fn title_size(&self) -> f32 {
        self.font_size + 4.0
    }

    /// Screen headline size.
    pub fn headline_size(&self) -> f32 {
        self.font_size + 10.0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_hex_falls_back() {
        let cfg = ThemeConfig {
            primary: "not-a-color".into(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&cfg).primary, Color::BLUE);
    }

    #[test]
    fn severity_palette_follows_config() {
        let cfg = ThemeConfig {
            green: "#000000".into(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.severity(Severity::Green), Color::BLACK);
        assert_eq!(theme.severity(Severity::Red), theme.red);
    }

    #[test]
    fn tiny_font_size_keeps_captions_visible() {
        let cfg = ThemeConfig {
            font_size: 2.0,
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.font_size, MIN_FONT_SIZE);
        assert!(theme.caption_size() > 0.0);
    }
}
