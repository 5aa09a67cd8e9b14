mod file_storage;
mod models;
mod settings;

pub use file_storage::{QuoteStorage, Result, StorageError, DATA_DIR_ENV};
pub use models::*;
pub use settings::Settings;
