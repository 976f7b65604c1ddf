pub mod battery;
pub mod classify;
pub mod error;
pub mod event;
pub mod listener;
pub mod screen;
pub mod seed;
pub mod state;
pub mod store;

pub use battery::{BatteryLevel, Delta};
pub use classify::{classify, Classification, Estimate, Severity};
pub use error::{PowerAiError, Result};
pub use event::Message;
pub use listener::{EmergencyAlert, StateListener};
pub use screen::{EffectiveView, ScreenId, ScreenSelector, EMERGENCY_THRESHOLD};
pub use state::AppState;
pub use store::Store;
