//! Notification data models

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::errors::{NotificationError, Result};
use crate::quotes::Quote;

/// Title used for every daily reminder
pub const NOTIFICATION_TITLE: &str = "Daily Motivation";

/// How long the desktop should keep a reminder on screen
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Wall-clock time of day for the daily reminder.
///
/// Serialized as an `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NotificationTime {
    hour: u32,
    minute: u32,
}

impl NotificationTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(NotificationError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// True when `now` falls inside this hour and minute
    pub fn matches(&self, now: NaiveTime) -> bool {
        now.hour() == self.hour && now.minute() == self.minute
    }
}

impl Default for NotificationTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl fmt::Display for NotificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for NotificationTime {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NotificationError::InvalidTimeString(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for NotificationTime {
    type Error = NotificationError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<NotificationTime> for String {
    fn from(time: NotificationTime) -> Self {
        time.to_string()
    }
}

/// A notification ready to hand off to the desktop
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub message: String,
    #[serde(with = "timeout_secs")]
    pub timeout: Duration,
}

impl Notification {
    /// Daily reminder for a quote: `"<content>" - <author>`
    pub fn for_quote(quote: &Quote) -> Self {
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            message: quote.display_line(),
            timeout: NOTIFICATION_TIMEOUT,
        }
    }
}

mod timeout_secs {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_range() {
        assert!(NotificationTime::new(0, 0).is_ok());
        assert!(NotificationTime::new(23, 59).is_ok());
        assert!(matches!(
            NotificationTime::new(24, 0),
            Err(NotificationError::InvalidTime { hour: 24, minute: 0 })
        ));
        assert!(NotificationTime::new(12, 60).is_err());
    }

    #[test]
    fn test_parse_time() {
        let time: NotificationTime = "08:30".parse().unwrap();
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 30);

        let time: NotificationTime = "7:5".parse().unwrap();
        assert_eq!(time.to_string(), "07:05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "0830", "ab:cd", "8:30:00", "-1:00"] {
            assert!(bad.parse::<NotificationTime>().is_err(), "accepted {:?}", bad);
        }
        assert!(matches!(
            "25:00".parse::<NotificationTime>(),
            Err(NotificationError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_default_is_nine_am() {
        assert_eq!(NotificationTime::default().to_string(), "09:00");
    }

    #[test]
    fn test_matches_whole_minute() {
        let time = NotificationTime::new(9, 0).unwrap();
        assert!(time.matches(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert!(time.matches(NaiveTime::from_hms_opt(9, 0, 59).unwrap()));
        assert!(!time.matches(NaiveTime::from_hms_opt(9, 1, 0).unwrap()));
        assert!(!time.matches(NaiveTime::from_hms_opt(21, 0, 0).unwrap()));
    }

    #[test]
    fn test_notification_for_quote() {
        let quote = Quote::new("Hi", "Z", ["life"]);
        let notification = Notification::for_quote(&quote);
        assert_eq!(notification.title, "Daily Motivation");
        assert_eq!(notification.message, "\"Hi\" - Z");
        assert_eq!(notification.timeout, Duration::from_secs(10));

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Daily Motivation", "message": "\"Hi\" - Z", "timeout": 10})
        );
    }
}
