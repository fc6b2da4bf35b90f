//! Dashboard card view model.

use serde::{Deserialize, Serialize};

/// One card on the statistics dashboard.
///
/// Cards are assembled by the dashboard service and rendered as-is; the
/// `payload` carries card-specific data the front end knows how to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCard {
    /// Stable identifier used for card ordering preferences.
    pub id: String,
    /// Card heading.
    pub title: String,
    /// Preformatted headline value.
    pub value: String,
    /// Optional secondary line below the value.
    #[serde(default)]
    pub hint: Option<String>,
    /// Display position, lowest first.
    #[serde(default)]
    pub position: u32,
    /// Card-specific payload for the front end.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl DashboardCard {
    /// Creates a card with no hint, position 0, and an empty payload.
    pub fn new(id: impl Into<String>, title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value: value.into(),
            hint: None,
            position: 0,
            payload: serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let card = DashboardCard::new("time_off", "Time off", "3 days");
        assert_eq!(card.hint, None);
        assert_eq!(card.position, 0);
        assert_eq!(card.payload, serde_json::Value::Null);
    }

    #[test]
    fn test_deserialization_applies_defaults() {
        let json = r#"{
            "id": "surplus",
            "title": "Surplus",
            "value": "+02:30"
        }"#;

        let card: DashboardCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.hint, None);
        assert_eq!(card.payload, serde_json::Value::Null);
    }

    #[test]
    fn test_payload_round_trips() {
        let mut card = DashboardCard::new("time_off", "Time off", "3 days");
        card.payload = serde_json::json!({ "sn_days": 1, "co_days": 2, "cm_days": 0 });

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: DashboardCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
