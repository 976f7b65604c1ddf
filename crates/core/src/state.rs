use crate::{
    battery::BatteryLevel,
    classify::{classify, Classification},
    screen::{EffectiveView, ScreenSelector},
    seed::{default_apps, default_contacts, AppUsageEntry, EmergencyContact},
};
use chrono::{DateTime, Local};

/// Central application state — every view reads from this snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Simulated battery level.  Only `BatteryStepped` writes it.
    pub battery: BatteryLevel,
    /// Display-only; never changed after start-up.
    pub charging: bool,
    /// The user's last screen choice.
    pub selector: ScreenSelector,
    /// "High Usage Apps" rows.
    pub apps: Vec<AppUsageEntry>,
    pub contacts: Vec<EmergencyContact>,
    /// Current local time (updated every second).
    pub time: DateTime<Local>,
}

impl AppState {
    pub fn new(battery: BatteryLevel, charging: bool) -> Self {
        Self {
            battery,
            charging,
            selector: ScreenSelector::new(),
            apps: default_apps(),
            contacts: default_contacts(),
            time: Local::now(),
        }
    }

    /// The screen to render right now.
    #[must_use]
    pub fn effective_view(&self) -> EffectiveView {
        self.selector.resolve(self.battery)
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        classify(self.battery)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BatteryLevel::INITIAL, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::Severity, screen::ScreenId};

    #[test]
    fn default_state_shows_dashboard() {
        let state = AppState::default();
        assert_eq!(state.battery.percent(), 73);
        assert!(!state.charging);
        assert_eq!(state.effective_view().screen, ScreenId::Dashboard);
        assert_eq!(state.classification().severity, Severity::Green);
    }

    #[test]
    fn critical_state_shows_emergency() {
        let state = AppState::new(BatteryLevel::new(5), false);
        assert_eq!(state.effective_view().screen, ScreenId::Emergency);
    }
}
