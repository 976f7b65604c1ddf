use serde::{Deserialize, Serialize};

/// One row of the "High Usage Apps" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUsageEntry {
    pub name: String,
    /// Share of foreground time in the last hour (0–100).
    pub percentage: u8,
    pub icon: String,
    /// Share of battery drain attributed to the app (0–100).
    pub battery_usage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relation: String,
    pub phone: String,
}

fn app(name: &str, percentage: u8, icon: &str, battery_usage: u8) -> AppUsageEntry {
    AppUsageEntry {
        name: name.to_string(),
        percentage,
        icon: icon.to_string(),
        battery_usage,
    }
}

fn contact(name: &str, relation: &str, phone: &str) -> EmergencyContact {
    EmergencyContact {
        name: name.to_string(),
        relation: relation.to_string(),
        phone: phone.to_string(),
    }
}

pub fn default_apps() -> Vec<AppUsageEntry> {
    vec![
        app("Instagram", 78, "📷", 23),
        app("Chrome", 65, "🌐", 18),
        app("Spotify", 52, "🎵", 15),
        app("WhatsApp", 38, "💬", 12),
    ]
}

pub fn default_contacts() -> Vec<EmergencyContact> {
    vec![
        contact("John Smith", "Emergency Contact", "+1 (555) 123-4567"),
        contact("Sarah Johnson", "Family", "+1 (555) 987-6543"),
        contact("Mike Wilson", "Friend", "+1 (555) 456-7890"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apps_are_sorted_by_usage() {
        let apps = default_apps();
        assert_eq!(apps.len(), 4);
        assert!(apps.windows(2).all(|w| w[0].percentage >= w[1].percentage));
        assert!(apps.iter().all(|a| a.percentage <= 100 && a.battery_usage <= 100));
    }

    #[test]
    fn three_contacts() {
        let contacts = default_contacts();
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0].name, "John Smith");
        assert_eq!(contacts[1].relation, "Family");
    }
}
