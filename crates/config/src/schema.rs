use powerai_core::{BatteryLevel, PowerAiError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest accepted `theme.font_size`.  Captions render 2 pt below the base
/// size and a zero-height line is rejected by the text shaper.
pub const MIN_FONT_SIZE: f32 = 6.0;

/// Root configuration structure parsed from `powerai.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerAiConfig {
    /// Battery simulator settings.
    pub simulator: SimulatorConfig,
    /// Window geometry.
    pub window: WindowConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

impl PowerAiConfig {
    /// Reject values the simulator cannot run with.
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulator;
        if sim.interval_ms == 0 {
            return Err(PowerAiError::Config("simulator.interval_ms must be > 0".into()));
        }
        if sim.initial_level > 100 {
            return Err(PowerAiError::Config(format!(
                "simulator.initial_level must be within 0..=100 (got {})",
                sim.initial_level
            )));
        }
        if !(0.0..=1.0).contains(&sim.change_probability) {
            return Err(PowerAiError::Config(format!(
                "simulator.change_probability must be within 0.0..=1.0 (got {})",
                sim.change_probability
            )));
        }
        let font_size = self.theme.font_size;
        if !font_size.is_finite() || font_size < MIN_FONT_SIZE {
            return Err(PowerAiError::Config(format!(
                "theme.font_size must be at least {MIN_FONT_SIZE} (got {font_size})"
            )));
        }
        Ok(())
    }
}

/// Battery simulator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Tick period in milliseconds.
    pub interval_ms: u64,
    /// Battery level at start-up (0 – 100).
    pub initial_level: u8,
    /// Charging flag shown on the battery card.  Never changes at runtime.
    pub charging: bool,
    /// Chance that a tick moves the level at all.
    pub change_probability: f64,
    /// Fixed RNG seed for reproducible runs; `None` = seeded from entropy.
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn initial_level(&self) -> BatteryLevel {
        BatteryLevel::new(self.initial_level)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            interval_ms:        5_000,
            initial_level:      BatteryLevel::INITIAL.percent(),
            charging:           false,
            change_probability: 0.3,
            seed:               None,
        }
    }
}

/// Window geometry in logical pixels, plus the screen opened at start-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width:  f32,
    pub height: f32,
    /// Screen shown at start-up (`"dashboard"`, `"travel"`, ...).
    /// Unknown names open the dashboard.
    pub start_screen: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width:        420.0,
            height:       860.0,
            start_screen: "dashboard".to_string(),
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#0f1115"`).
    pub background: String,
    /// Primary text color.
    pub foreground: String,
    /// Secondary / caption text color.
    pub muted: String,
    /// Card surface color.
    pub card: String,
    /// Primary brand color (buttons, highlights).
    pub primary: String,
    /// Accent color for the smart-insight block.
    pub accent: String,
    /// Emergency screen background.
    pub destructive: String,
    // Severity tiers
    pub red:    String,
    pub orange: String,
    pub yellow: String,
    pub green:  String,
    /// Base font size in points.
    pub font_size: f32,
    /// Corner radius for cards (pixels).
    pub border_radius: f32,
    /// Outer padding of each screen (pixels).
    pub padding: u16,
    /// Gap between cards (pixels).
    pub gap: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:    "#0f1115".to_string(),
            foreground:    "#f2f4f8".to_string(),
            muted:         "#8b93a7".to_string(),
            card:          "#1a1d24".to_string(),
            primary:       "#3b82f6".to_string(),
            accent:        "#22d3ee".to_string(),
            destructive:   "#ef4444".to_string(),
            red:           "#ef4444".to_string(),
            orange:        "#f97316".to_string(),
            yellow:        "#eab308".to_string(),
            green:         "#22c55e".to_string(),
            font_size:     14.0,
            border_radius: 24.0,
            padding:       24,
            gap:           16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = PowerAiConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.simulator.interval(), Duration::from_secs(5));
        assert_eq!(cfg.simulator.initial_level().percent(), 73);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: PowerAiConfig = toml::from_str(
            r#"
[simulator]
initial_level = 12
seed = 7
"#,
        )
        .unwrap();
        assert_eq!(cfg.simulator.initial_level, 12);
        assert_eq!(cfg.simulator.seed, Some(7));
        assert_eq!(cfg.simulator.interval_ms, 5_000);
        assert_eq!(cfg.theme, ThemeConfig::default());
    }

    #[test]
    fn zero_interval_rejected() {
        let mut cfg = PowerAiConfig::default();
        cfg.simulator.interval_ms = 0;
        assert!(matches!(cfg.validate(), Err(PowerAiError::Config(_))));
    }

    #[test]
    fn out_of_range_values_rejected() {
        let mut cfg = PowerAiConfig::default();
        cfg.simulator.initial_level = 101;
        assert!(cfg.validate().is_err());

        let mut cfg = PowerAiConfig::default();
        cfg.simulator.change_probability = 1.5;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("change_probability"));
    }

    #[test]
    fn tiny_font_size_rejected() {
        let mut cfg = PowerAiConfig::default();
        cfg.theme.font_size = 2.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("font_size"));

        cfg.theme.font_size = f32::NAN;
        assert!(cfg.validate().is_err());

        cfg.theme.font_size = MIN_FONT_SIZE;
        assert!(cfg.validate().is_ok());
    }
}
