use crate::{event::Message, screen::ScreenId, state::AppState};
use tracing::{info, warn};

/// Observer registered with [`Store`](crate::store::Store).
///
/// Listeners receive a read-only view of `AppState` after every mutation and
/// may return a follow-up `Message` to be fed back through the store.
pub trait StateListener: Send + std::fmt::Debug {
    /// Unique string identifier, e.g. `"emergency-alert"`.
    fn id(&self) -> &str;

    /// Called once when the listener is registered.
    fn init(&mut self, _state: &AppState) -> Option<Message> {
        None
    }

    /// Called after every state mutation.
    fn on_state_change(&mut self, _state: &AppState) -> Option<Message> {
        None
    }
}

/// Logs when the effective view enters or leaves the emergency screen.
///
/// Only the log is edge-triggered; the override itself is recomputed on
/// every read.
#[derive(Debug, Default)]
pub struct EmergencyAlert {
    active: bool,
    alerts: u32,
}

impl EmergencyAlert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times emergency mode has been entered.
    pub fn alerts(&self) -> u32 {
        self.alerts
    }
}

impl StateListener for EmergencyAlert {
    fn id(&self) -> &str {
        "emergency-alert"
    }

    fn init(&mut self, state: &AppState) -> Option<Message> {
        self.on_state_change(state)
    }

    fn on_state_change(&mut self, state: &AppState) -> Option<Message> {
        let view = state.effective_view();
        let now_active = view.screen == ScreenId::Emergency;

        match (self.active, now_active) {
            (false, true) => {
                self.alerts += 1;
                if view.forced {
                    warn!(
                        "Critical battery ({}), emergency mode forced; notifying {} contacts",
                        state.battery,
                        state.contacts.len()
                    );
                } else {
                    warn!("Emergency mode opened manually at {}", state.battery);
                }
            }
            (true, false) => info!("Left emergency mode at {}", state.battery),
            _ => {}
        }

        self.active = now_active;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery::BatteryLevel;

    #[test]
    fn counts_each_entry_once() {
        let mut alert = EmergencyAlert::new();
        let mut state = AppState::new(BatteryLevel::new(6), false);

        alert.on_state_change(&state);
        assert_eq!(alert.alerts(), 0);

        state.battery = BatteryLevel::new(5);
        alert.on_state_change(&state);
        state.battery = BatteryLevel::new(4);
        alert.on_state_change(&state);
        assert_eq!(alert.alerts(), 1);

        state.battery = BatteryLevel::new(6);
        alert.on_state_change(&state);
        state.battery = BatteryLevel::new(5);
        alert.on_state_change(&state);
        assert_eq!(alert.alerts(), 2);
    }

    #[test]
    fn init_sees_critical_start() {
        let mut alert = EmergencyAlert::new();
        alert.init(&AppState::new(BatteryLevel::new(2), false));
        assert_eq!(alert.alerts(), 1);
    }
}
