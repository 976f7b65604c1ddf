use crate::{battery::Delta, screen::ScreenId};

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - User input           → `SelectScreen`, `ExitEmergency`, the no-op actions
/// - Battery simulator    → `BatteryStepped`
/// - Config watcher task  → `ConfigReloaded`
/// - Timer subscription   → `Tick`
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ── Navigation ────────────────────────────────────────────────────────────
    /// User picked a screen (back arrows select the dashboard).
    SelectScreen(ScreenId),
    /// "EXIT EMERGENCY MODE" button.
    ExitEmergency,

    // ── Battery simulator ─────────────────────────────────────────────────────
    /// One scheduled perturbation of the battery level.
    BatteryStepped(Delta),

    // ── Display-only actions ──────────────────────────────────────────────────
    /// "Optimize Apps" on the dashboard.
    OptimizeApps,
    /// "Start Navigation" on the travel screen.
    StartNavigation,
    /// "Add Emergency Contact" on the contacts screen.
    AddEmergencyContact,

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,

    // ── Internal ──────────────────────────────────────────────────────────────
    /// One-second timer tick — used to update the status-line clock.
    Tick,
}
