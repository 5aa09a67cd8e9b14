use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::quotes::Quote;

/// A quote as it was surfaced to the user, stamped with the view time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub quote: Quote,
    pub viewed_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(quote: Quote, viewed_at: DateTime<Utc>) -> Self {
        Self { quote, viewed_at }
    }

    /// View time in local time, `YYYY-MM-DD HH:MM`
    pub fn display_time(&self) -> String {
        self.viewed_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_history_entry_json_is_flat() {
        let viewed_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let entry = HistoryEntry::new(Quote::new("Hi", "Z", ["life"]), viewed_at);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["content"], "Hi");
        assert_eq!(json["author"], "Z");
        assert_eq!(json["tags"], serde_json::json!(["life"]));
        assert_eq!(json["viewedAt"], "2024-03-01T08:30:00Z");

        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
