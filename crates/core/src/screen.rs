use crate::battery::BatteryLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// At or below this level the emergency screen is forced.
pub const EMERGENCY_THRESHOLD: u8 = 5;

/// The five screens the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenId {
    #[default]
    Dashboard,
    Travel,
    Assistant,
    Contacts,
    Emergency,
}

impl ScreenId {
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Dashboard,
        ScreenId::Travel,
        ScreenId::Assistant,
        ScreenId::Contacts,
        ScreenId::Emergency,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::Dashboard => "dashboard",
            ScreenId::Travel    => "travel",
            ScreenId::Assistant => "assistant",
            ScreenId::Contacts  => "contacts",
            ScreenId::Emergency => "emergency",
        }
    }

    /// Resolve an identifier, falling back to the dashboard for anything
    /// unrecognised.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == name)
            .unwrap_or_default()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The screen actually rendered after the emergency override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveView {
    pub screen: ScreenId,
    /// `true` when the override replaced the user's selection.
    pub forced: bool,
}

/// Holds the user's last screen choice.  No history, no back stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenSelector {
    selected: ScreenId,
}

impl ScreenSelector {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> ScreenId {
        self.selected
    }

    pub fn select(&mut self, screen: ScreenId) {
        self.selected = screen;
    }

    /// "EXIT EMERGENCY MODE".  Selects the dashboard even while the battery
    /// is still critical, in which case the next [`resolve`](Self::resolve)
    /// forces emergency again.
    pub fn exit_emergency(&mut self) {
        self.selected = ScreenId::Dashboard;
    }

    /// Recomputed on every read; not edge-triggered.
    #[must_use]
    pub fn resolve(&self, level: BatteryLevel) -> EffectiveView {
        if level.percent() <= EMERGENCY_THRESHOLD {
            EffectiveView {
                screen: ScreenId::Emergency,
                forced: self.selected != ScreenId::Emergency,
            }
        } else {
            EffectiveView { screen: self.selected, forced: false }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECTABLE: [ScreenId; 4] = [
        ScreenId::Dashboard,
        ScreenId::Travel,
        ScreenId::Assistant,
        ScreenId::Contacts,
    ];

    fn selector(screen: ScreenId) -> ScreenSelector {
        let mut s = ScreenSelector::new();
        s.select(screen);
        s
    }

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(ScreenSelector::new().selected(), ScreenId::Dashboard);
    }

    #[test]
    fn critical_level_always_forces_emergency() {
        for p in 0..=EMERGENCY_THRESHOLD {
            for screen in ScreenId::ALL {
                let view = selector(screen).resolve(BatteryLevel::new(p));
                assert_eq!(view.screen, ScreenId::Emergency, "p={p} s={screen}");
            }
        }
    }

    #[test]
    fn selection_wins_above_threshold() {
        for p in (EMERGENCY_THRESHOLD + 1)..=100 {
            for screen in SELECTABLE {
                let view = selector(screen).resolve(BatteryLevel::new(p));
                assert_eq!(view, EffectiveView { screen, forced: false });
            }
        }
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let level = BatteryLevel::new(50);
        let mut s = selector(ScreenId::Assistant);
        let once = s.resolve(level);
        s.select(ScreenId::Assistant);
        assert_eq!(s.resolve(level), once);
    }

    #[test]
    fn exit_while_critical_is_overridden() {
        let mut s = selector(ScreenId::Emergency);
        s.exit_emergency();
        assert_eq!(s.selected(), ScreenId::Dashboard);

        let view = s.resolve(BatteryLevel::new(3));
        assert_eq!(view.screen, ScreenId::Emergency);
        assert!(view.forced);
    }

    #[test]
    fn manual_emergency_is_not_forced() {
        let view = selector(ScreenId::Emergency).resolve(BatteryLevel::new(2));
        assert!(!view.forced);
    }

    #[test]
    fn unknown_names_fall_back_to_dashboard() {
        assert_eq!(ScreenId::from_name("travel"), ScreenId::Travel);
        assert_eq!(ScreenId::from_name("settings"), ScreenId::Dashboard);
        assert_eq!(ScreenId::from_name(""), ScreenId::Dashboard);
    }
}
