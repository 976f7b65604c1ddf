use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated charge level, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);
    /// Level every fresh process starts from.
    pub const INITIAL: Self = Self(73);

    /// Build a level, clamping anything above 100.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX.0))
    }

    #[inline]
    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Apply one simulator step: `clamp(level + delta, 0, 100)`.
    #[must_use]
    pub fn apply(self, delta: Delta) -> Self {
        let next = i16::from(self.0) + i16::from(delta.as_i8());
        // Clamped to 0..=100 so the narrowing cast is lossless.
        Self(next.clamp(0, i16::from(Self::MAX.0)) as u8)
    }
}

impl Default for BatteryLevel {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<u8> for BatteryLevel {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<BatteryLevel> for u8 {
    fn from(level: BatteryLevel) -> Self {
        level.0
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One perturbation drawn by the battery simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delta {
    Down,
    Hold,
    Up,
}

impl Delta {
    #[must_use]
    pub fn as_i8(self) -> i8 {
        match self {
            Delta::Down => -1,
            Delta::Hold => 0,
            Delta::Up   => 1,
        }
    }

    /// Map two uniform samples in `[0, 1)` to a delta.
    ///
    /// `change_roll < change_probability` selects a change; the direction is
    /// then picked by `direction_roll` with even odds.
    #[must_use]
    pub fn from_rolls(change_roll: f64, direction_roll: f64, change_probability: f64) -> Self {
        if change_roll >= change_probability {
            Delta::Hold
        } else if direction_roll < 0.5 {
            Delta::Down
        } else {
            Delta::Up
        }
    }
}
