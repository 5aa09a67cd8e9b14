//! Daily reminder notifications

pub mod errors;
pub mod models;
pub mod notifier;
pub mod scheduler;

pub use errors::{NotificationError, Result};
pub use models::*;
pub use notifier::{DesktopNotifier, Notifier};
pub use scheduler::{Clock, NotificationScheduler, SystemClock};
