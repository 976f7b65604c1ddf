//! Desktop window for `powerai`.
//!
//! Owns the Iced application loop and wires together all background tasks:
//! - Battery simulator (one delta every `simulator.interval_ms`)
//! - Config file watcher (live theme reload on change)
//! - 1-second timer (status-line clock)

use futures::{channel::mpsc::Sender, SinkExt};
use iced::{Element, Size, Subscription, Task};
use powerai_config::{default_path, load as load_config, PowerAiConfig, ConfigWatcher};
use powerai_core::{AppState, EmergencyAlert, Message, ScreenId, Store};
use powerai_renderer::{render, screen_title};
use powerai_simulator::spawn_simulator;
use powerai_theme::Theme;
use std::time::Duration;
use tracing::{error, info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the dashboard window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let window = load_or_default().window;

    iced::application(Dashboard::new, Dashboard::update, Dashboard::view)
        .title(Dashboard::title)
        .subscription(Dashboard::subscription)
        .window_size(Size::new(window.width, window.height))
        .run()
}

fn load_or_default() -> PowerAiConfig {
    load_config(default_path()).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        PowerAiConfig::default()
    })
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    store:  Store,
    config: PowerAiConfig,
    theme:  Theme,
}

impl Dashboard {
    fn new() -> (Self, Task<Message>) {
        Self::with_config(load_or_default())
    }

    fn with_config(config: PowerAiConfig) -> (Self, Task<Message>) {
        let theme = Theme::from_config(&config.theme);
        let mut state = AppState::new(config.simulator.initial_level(), config.simulator.charging);
        state.selector.select(ScreenId::from_name(&config.window.start_screen));

        let mut store = Store::new(state);
        let init = store.subscribe(Box::new(EmergencyAlert::new()));

        let dashboard = Self { store, config, theme };
        (dashboard, follow_ups(init.into_iter().collect()))
    }

    fn title(&self) -> String {
        let screen = self.store.state().effective_view().screen;
        format!("PowerAI · {}", screen_title(screen))
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigReloaded => {
                self.reload_config();
                Task::none()
            }
            msg => follow_ups(self.store.dispatch(msg)),
        }
    }

    fn reload_config(&mut self) {
        match load_config(default_path()) {
            Ok(cfg) => {
                info!("Config reloaded");
                if cfg.simulator != self.config.simulator {
                    info!("Simulator settings changed; they apply on next start");
                }
                self.theme  = Theme::from_config(&cfg.theme);
                self.config = cfg;
            }
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        render(self.store.state(), &self.theme)
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick);

        Subscription::batch([
            tick,
            Subscription::run(battery_stream),
            Subscription::run(config_stream),
        ])
    }
}

/// Feed listener follow-ups back into `update`.
fn follow_ups(messages: Vec<Message>) -> Task<Message> {
    if messages.is_empty() {
        return Task::none();
    }
    Task::batch(messages.into_iter().map(Task::done))
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.  The stream future owns its task
// handle, so when Iced drops the subscription the task is aborted with it.

/// Runs the battery simulator and forwards each drawn delta.
fn battery_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(4, |mut sender: Sender<Message>| async move {
        let cfg = load_or_default().simulator;

        match spawn_simulator(&cfg) {
            Ok(mut handle) => {
                while let Some(delta) = handle.next().await {
                    if sender.send(Message::BatteryStepped(delta)).await.is_err() {
                        break; // window gone
                    }
                }
            }
            Err(e) => error!("Battery simulator unavailable: {e}"),
        }

        // Simulator stopped — stall rather than end the subscription.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches `~/.config/powerai/powerai.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerai_core::{BatteryLevel, Delta};

    fn dashboard_at(level: u8) -> Dashboard {
        let mut config = PowerAiConfig::default();
        config.simulator.initial_level = level;
        Dashboard::with_config(config).0
    }

    #[test]
    fn boots_on_dashboard_with_configured_level() {
        let app = dashboard_at(73);
        assert_eq!(app.store.state().battery, BatteryLevel::new(73));
        assert_eq!(app.title(), "PowerAI · Dashboard");
    }

    #[test]
    fn navigation_updates_title() {
        let mut app = dashboard_at(60);
        let _ = app.update(Message::SelectScreen(ScreenId::Assistant));
        assert_eq!(app.title(), "PowerAI · Virtual Assistant");
    }

    #[test]
    fn dropping_to_five_percent_forces_emergency() {
        let mut app = dashboard_at(6);
        let _ = app.update(Message::SelectScreen(ScreenId::Travel));
        let _ = app.update(Message::BatteryStepped(Delta::Down));
        assert_eq!(app.store.state().effective_view().screen, ScreenId::Emergency);
        assert_eq!(app.title(), "PowerAI · Emergency Mode");

        let _ = app.update(Message::ExitEmergency);
        assert_eq!(app.store.state().effective_view().screen, ScreenId::Emergency);
    }

    #[test]
    fn charging_flag_comes_from_config() {
        let mut config = PowerAiConfig::default();
        config.simulator.charging = true;
        let (app, _) = Dashboard::with_config(config);
        assert!(app.store.state().charging);
    }

    #[test]
    fn start_screen_comes_from_config() {
        let mut config = PowerAiConfig::default();
        config.window.start_screen = "travel".into();
        let (app, _) = Dashboard::with_config(config);
        assert_eq!(app.title(), "PowerAI · Travel Guardian");
    }

    #[test]
    fn unknown_start_screen_opens_dashboard() {
        let mut config = PowerAiConfig::default();
        config.window.start_screen = "settings".into();
        let (app, _) = Dashboard::with_config(config);
        assert_eq!(app.store.state().effective_view().screen, ScreenId::Dashboard);
    }
}
