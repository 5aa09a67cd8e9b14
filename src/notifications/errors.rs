//! Notification error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Invalid notification time {hour}:{minute:02} (hour must be 0-23, minute 0-59)")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("Invalid time format '{0}', expected HH:MM")]
    InvalidTimeString(String),

    #[error("Failed to deliver notification: {0}")]
    Delivery(String),

    #[error("Failed to start notification scheduler: {0}")]
    Spawn(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NotificationError>;
