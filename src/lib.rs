//! Daily motivation quotes: a read-only quote catalog, file-backed favorites
//! and history, and a background scheduler for the daily reminder.
//!
//! The presentation layer lives outside this library and drives it through
//! [`QuoteCatalog`], [`QuoteStorage`] and [`NotificationScheduler`].

pub mod notifications;
pub mod quotes;
pub mod storage;

pub use notifications::{NotificationScheduler, NotificationTime};
pub use quotes::{Quote, QuoteCatalog};
pub use storage::{HistoryEntry, QuoteStorage, Settings};
