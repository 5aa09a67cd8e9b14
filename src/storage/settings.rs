//! Persisted user settings

use serde::{Deserialize, Serialize};

use crate::notifications::NotificationTime;

/// Settings stored in `settings.json` next to the collections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Time of day for the daily reminder (HH:MM format)
    pub notification_time: NotificationTime,
    /// Whether the reminder should run when the app starts
    pub notifications_enabled: bool,
}
