//! Threshold lookups from a battery level to the canned dashboard copy.

use crate::battery::BatteryLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour tier of a battery level.  Declared from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Orange,
    Yellow,
    Green,
}

impl Severity {
    /// 3 = most severe (red), 0 = least severe (green).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Severity::Red    => 3,
            Severity::Orange => 2,
            Severity::Yellow => 1,
            Severity::Green  => 0,
        }
    }

    /// Coloured-circle glyph shown next to the battery icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Red    => "🔴",
            Severity::Orange => "🟠",
            Severity::Yellow => "🟡",
            Severity::Green  => "🟢",
        }
    }
}

/// Predicted time until empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub hours:   u8,
    pub minutes: u8,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m remaining", self.hours, self.minutes)
    }
}

/// Everything the dashboard derives from a single battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub prediction: Estimate,
    pub insight:    &'static str,
    pub severity:   Severity,
}

struct Bucket {
    /// Lowest level (exclusive) that falls into this bucket.
    above:      Option<u8>,
    severity:   Severity,
    hours:      u8,
    minutes:    u8,
    insight:    &'static str,
}

// First match wins.
static BUCKETS: [Bucket; 5] = [
    Bucket {
        above: Some(80), severity: Severity::Green, hours: 8, minutes: 45,
        insight: "Battery health is excellent. Consider enabling power-saving mode for extended usage.",
    },
    Bucket {
        above: Some(60), severity: Severity::Green, hours: 6, minutes: 30,
        insight: "Good battery level. Close Instagram to extend battery life by 2 hours.",
    },
    Bucket {
        above: Some(40), severity: Severity::Yellow, hours: 4, minutes: 15,
        insight: "Moderate usage detected. Enable battery saver or find a charger soon.",
    },
    Bucket {
        above: Some(20), severity: Severity::Orange, hours: 2, minutes: 10,
        insight: "Low battery warning. Close heavy apps and reduce screen brightness.",
    },
    Bucket {
        above: None, severity: Severity::Red, hours: 1, minutes: 5,
        insight: "Critical battery level! Enable emergency mode and contact emergency contacts.",
    },
];

/// Classify a battery level.  Total over `0..=100`.
#[must_use]
pub fn classify(level: BatteryLevel) -> Classification {
    let p = level.percent();
    let bucket = BUCKETS
        .iter()
        .find(|b| b.above.map_or(true, |floor| p > floor))
        .unwrap_or(&BUCKETS[BUCKETS.len() - 1]);

    Classification {
        prediction: Estimate { hours: bucket.hours, minutes: bucket.minutes },
        insight:    bucket.insight,
        severity:   bucket.severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(p: u8) -> Classification {
        classify(BatteryLevel::new(p))
    }

    #[test]
    fn severity_never_increases_with_level() {
        let mut prev = at(0).severity.rank();
        for p in 1..=100 {
            let rank = at(p).severity.rank();
            assert!(rank <= prev, "severity rose at {p}");
            prev = rank;
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(at(100).severity, Severity::Green);
        assert_eq!(at(81).prediction.to_string(), "8h 45m remaining");
        assert_eq!(at(80).prediction.to_string(), "6h 30m remaining");
        assert_eq!(at(61).severity, Severity::Green);
        assert_eq!(at(60).severity, Severity::Yellow);
        assert_eq!(at(41).severity, Severity::Yellow);
        assert_eq!(at(40).severity, Severity::Orange);
        assert_eq!(at(21).severity, Severity::Orange);
        assert_eq!(at(20).severity, Severity::Red);
        assert_eq!(at(0).prediction, Estimate { hours: 1, minutes: 5 });
    }

    #[test]
    fn initial_level_suggests_closing_an_app() {
        let c = at(73);
        assert_eq!(c.prediction, Estimate { hours: 6, minutes: 30 });
        assert_eq!(c.severity, Severity::Green);
        assert!(c.insight.contains("Close Instagram"));
    }

    #[test]
    fn moderate_level() {
        let c = at(45);
        assert_eq!(c.prediction.to_string(), "4h 15m remaining");
        assert!(c.insight.starts_with("Moderate usage detected"));
    }

    #[test]
    fn critical_level_mentions_emergency_mode() {
        assert!(at(3).insight.contains("emergency mode"));
    }

    #[test]
    fn glyphs_follow_severity() {
        assert_eq!(at(90).severity.glyph(), "🟢");
        assert_eq!(at(10).severity.glyph(), "🔴");
    }
}
