use crate::{event::Message, listener::StateListener, state::AppState};
use tracing::{debug, info};

/// Single owner and single writer of [`AppState`].
///
/// Every mutation goes through [`Store::dispatch`], which notifies the
/// registered listeners afterwards.  Messages that don't touch state
/// (the display-only actions) are logged and produce no notification.
#[derive(Debug, Default)]
pub struct Store {
    state:     AppState,
    listeners: Vec<Box<dyn StateListener>>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state, listeners: Vec::new() }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a listener.  Returns whatever its `init` asks for.
    pub fn subscribe(&mut self, mut listener: Box<dyn StateListener>) -> Option<Message> {
        debug!("Registered state listener '{}'", listener.id());
        let follow_up = listener.init(&self.state);
        self.listeners.push(listener);
        follow_up
    }

    /// Apply a message.  Returns follow-up messages emitted by listeners.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Message> {
        let changed = match msg {
            Message::SelectScreen(screen) => {
                debug!("Screen selected: {screen}");
                self.state.selector.select(screen);
                true
            }
            Message::ExitEmergency => {
                info!("Exit emergency mode requested at {}", self.state.battery);
                self.state.selector.exit_emergency();
                true
            }
            Message::BatteryStepped(delta) => {
                let next = self.state.battery.apply(delta);
                if next == self.state.battery {
                    false
                } else {
                    debug!("Battery {} -> {}", self.state.battery, next);
                    self.state.battery = next;
                    true
                }
            }
            Message::Tick => {
                self.state.time = chrono::Local::now();
                true
            }
            Message::OptimizeApps => {
                info!("Optimize apps requested ({} apps tracked)", self.state.apps.len());
                false
            }
            Message::StartNavigation => {
                info!("Start navigation requested");
                false
            }
            Message::AddEmergencyContact => {
                info!("Add emergency contact requested");
                false
            }
            Message::ConfigReloaded => false,
        };

        if changed {
            self.notify()
        } else {
            Vec::new()
        }
    }

    fn notify(&mut self) -> Vec<Message> {
        let state = &self.state;
        self.listeners
            .iter_mut()
            .filter_map(|l| l.on_state_change(state))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        battery::{BatteryLevel, Delta},
        classify::Estimate,
        screen::ScreenId,
    };
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[derive(Debug, Default)]
    struct Counter(Arc<AtomicUsize>);

    impl StateListener for Counter {
        fn id(&self) -> &str {
            "counter"
        }

        fn on_state_change(&mut self, _state: &AppState) -> Option<Message> {
            self.0.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    fn store_at(p: u8) -> Store {
        Store::new(AppState::new(BatteryLevel::new(p), false))
    }

    #[test]
    fn scenario_initial_dashboard() {
        let store = Store::default();
        let state = store.state();
        assert_eq!(state.effective_view().screen, ScreenId::Dashboard);
        assert_eq!(state.classification().prediction, Estimate { hours: 6, minutes: 30 });
    }

    #[test]
    fn scenario_five_percent_forces_emergency() {
        let store = store_at(5);
        assert_eq!(store.state().effective_view().screen, ScreenId::Emergency);
    }

    #[test]
    fn scenario_select_travel() {
        let mut store = store_at(45);
        store.dispatch(Message::SelectScreen(ScreenId::Travel));
        assert_eq!(store.state().effective_view().screen, ScreenId::Travel);
        assert_eq!(
            store.state().classification().prediction.to_string(),
            "4h 15m remaining"
        );
    }

    #[test]
    fn scenario_exit_while_critical_stays_in_emergency() {
        let mut store = store_at(3);
        store.dispatch(Message::SelectScreen(ScreenId::Dashboard));
        assert_eq!(store.state().effective_view().screen, ScreenId::Emergency);

        store.dispatch(Message::ExitEmergency);
        assert_eq!(store.state().selector.selected(), ScreenId::Dashboard);
        assert_eq!(store.state().effective_view().screen, ScreenId::Emergency);
    }

    #[test]
    fn recovering_above_threshold_restores_selection() {
        let mut store = store_at(5);
        store.dispatch(Message::SelectScreen(ScreenId::Contacts));
        store.dispatch(Message::BatteryStepped(Delta::Up));
        assert_eq!(store.state().battery.percent(), 6);
        assert_eq!(store.state().effective_view().screen, ScreenId::Contacts);
    }

    #[test]
    fn battery_steps_clamp() {
        let mut store = store_at(100);
        store.dispatch(Message::BatteryStepped(Delta::Up));
        assert_eq!(store.state().battery.percent(), 100);

        let mut store = store_at(0);
        store.dispatch(Message::BatteryStepped(Delta::Down));
        assert_eq!(store.state().battery.percent(), 0);
    }

    #[test]
    fn listeners_only_hear_mutations() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut store = store_at(50);
        store.subscribe(Box::new(Counter(hits.clone())));

        store.dispatch(Message::BatteryStepped(Delta::Down));
        store.dispatch(Message::SelectScreen(ScreenId::Assistant));
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        store.dispatch(Message::BatteryStepped(Delta::Hold));
        store.dispatch(Message::StartNavigation);
        store.dispatch(Message::AddEmergencyContact);
        store.dispatch(Message::OptimizeApps);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
