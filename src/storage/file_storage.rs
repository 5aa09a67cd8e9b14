use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::models::HistoryEntry;
use super::settings::Settings;
use crate::quotes::Quote;

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV: &str = "MOTIVATION_DATA_DIR";

const DATA_DIR_NAME: &str = ".motivation_app";
const FAVORITES_FILE: &str = "favorites.json";
const HISTORY_FILE: &str = "history.json";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// File-backed favorites and history.
///
/// Every operation reads or rewrites a whole file. There is no locking, so a
/// single owner must serialize all calls.
pub struct QuoteStorage {
    base_path: PathBuf,
}

impl QuoteStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory (`~/.motivation_app`, or `$MOTIVATION_DATA_DIR`)
    pub fn default_data_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        dirs::home_dir()
            .map(|p| p.join(DATA_DIR_NAME))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.base_path.join(FAVORITES_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.base_path.join(HISTORY_FILE)
    }

    fn settings_path(&self) -> PathBuf {
        self.base_path.join(SETTINGS_FILE)
    }

    /// Ensure the data directory and both collection files exist.
    ///
    /// Existing files are left untouched, so this is safe on every startup.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).map_err(|source| StorageError::Write {
            path: self.base_path.clone(),
            source,
        })?;

        for path in [self.favorites_path(), self.history_path()] {
            if !path.exists() {
                log::info!("Creating empty collection at {}", path.display());
                write_json::<[Quote]>(&path, &[])?;
            }
        }

        Ok(())
    }

    // ===== Favorites =====

    pub fn get_favorites(&self) -> Result<Vec<Quote>> {
        read_json(&self.favorites_path())
    }

    /// Add a quote to favorites unless an equal one is already there.
    ///
    /// Returns `true` when the quote was inserted.
    pub fn add_favorite(&self, quote: &Quote) -> Result<bool> {
        let mut favorites = self.get_favorites()?;
        if favorites.contains(quote) {
            log::debug!("Quote by {} already in favorites", quote.author);
            return Ok(false);
        }

        favorites.push(quote.clone());
        write_json(&self.favorites_path(), &favorites)?;
        Ok(true)
    }

    pub fn is_favorite(&self, quote: &Quote) -> Result<bool> {
        Ok(self.get_favorites()?.contains(quote))
    }

    /// Write favorites as `"<content>" - <author>` lines to `path`,
    /// replacing any existing file. Returns the number of quotes written.
    pub fn export_favorites(&self, path: &Path) -> Result<usize> {
        let favorites = self.get_favorites()?;
        let mut out = String::new();
        for quote in &favorites {
            out.push_str(&quote.display_line());
            out.push('\n');
        }

        fs::write(path, out).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Exported {} favorites to {}", favorites.len(), path.display());
        Ok(favorites.len())
    }

    // ===== History =====

    pub fn get_history(&self) -> Result<Vec<HistoryEntry>> {
        read_json(&self.history_path())
    }

    /// Append a quote to history stamped with the current time.
    ///
    /// The stamp never goes below the previous entry's, so `viewedAt` stays
    /// non-decreasing even if the wall clock steps backwards.
    pub fn add_to_history(&self, quote: &Quote) -> Result<HistoryEntry> {
        let mut history = self.get_history()?;

        let mut viewed_at = Utc::now();
        if let Some(last) = history.last() {
            viewed_at = viewed_at.max(last.viewed_at);
        }

        let entry = HistoryEntry::new(quote.clone(), viewed_at);
        history.push(entry.clone());
        write_json(&self.history_path(), &history)?;

        Ok(entry)
    }

    // ===== Settings =====

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        read_json(&path)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        fs::create_dir_all(&self.base_path).map_err(|source| StorageError::Write {
            path: self.base_path.clone(),
            source,
        })?;
        write_json(&self.settings_path(), settings)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationTime;
    use tempfile::TempDir;

    fn create_test_storage() -> (QuoteStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = QuoteStorage::new(temp_dir.path().join("data"));
        storage.init().unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_init_creates_empty_arrays() {
        let (storage, _temp) = create_test_storage();

        let favorites = fs::read_to_string(storage.favorites_path()).unwrap();
        let history = fs::read_to_string(storage.history_path()).unwrap();
        assert_eq!(favorites, "[]");
        assert_eq!(history, "[]");

        assert!(storage.get_favorites().unwrap().is_empty());
        assert!(storage.get_history().unwrap().is_empty());
    }

    #[test]
    fn test_init_is_idempotent() {
        let (storage, _temp) = create_test_storage();
        storage.add_favorite(&Quote::new("A", "X", ["life"])).unwrap();
        storage.add_to_history(&Quote::new("B", "Y", ["work"])).unwrap();

        let favorites_before = fs::read_to_string(storage.favorites_path()).unwrap();
        let history_before = fs::read_to_string(storage.history_path()).unwrap();

        storage.init().unwrap();
        storage.init().unwrap();

        assert_eq!(fs::read_to_string(storage.favorites_path()).unwrap(), favorites_before);
        assert_eq!(fs::read_to_string(storage.history_path()).unwrap(), history_before);
    }

    #[test]
    fn test_add_favorite_deduplicates() {
        let (storage, _temp) = create_test_storage();
        let quote = Quote::new("A", "X", ["life", "work"]);

        assert!(storage.add_favorite(&quote).unwrap());
        assert!(!storage.add_favorite(&Quote::new("A", "X", ["work", "life"])).unwrap());

        let favorites = storage.get_favorites().unwrap();
        assert_eq!(favorites, vec![quote.clone()]);
        assert!(storage.is_favorite(&quote).unwrap());
    }

    #[test]
    fn test_favorites_keep_insertion_order() {
        let (storage, _temp) = create_test_storage();
        let b = Quote::new("B", "Y", ["work"]);
        let a = Quote::new("A", "X", ["life"]);

        storage.add_favorite(&b).unwrap();
        storage.add_favorite(&a).unwrap();

        assert_eq!(storage.get_favorites().unwrap(), vec![b, a]);
    }

    #[test]
    fn test_same_content_different_tags_is_distinct() {
        let (storage, _temp) = create_test_storage();
        storage.add_favorite(&Quote::new("A", "X", ["life"])).unwrap();
        storage.add_favorite(&Quote::new("A", "X", ["work"])).unwrap();

        assert_eq!(storage.get_favorites().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_favorites_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = QuoteStorage::new(temp_dir.path().to_path_buf());

        let err = storage.get_favorites().unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn test_malformed_favorites_file_is_reported() {
        let (storage, _temp) = create_test_storage();
        fs::write(storage.favorites_path(), "[{\"content\": ").unwrap();

        let err = storage.get_favorites().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));

        let err = storage.add_favorite(&Quote::new("A", "X", ["life"])).unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
    }

    #[test]
    fn test_history_round_trip() {
        let (storage, _temp) = create_test_storage();
        let quote = Quote::new("A", "X", ["life"]);
        let before = Utc::now() - chrono::Duration::seconds(1);

        storage.add_to_history(&quote).unwrap();

        let history = storage.get_history().unwrap();
        let last = history.last().unwrap();
        assert_eq!(last.quote, quote);
        assert!(last.viewed_at >= before);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(storage.history_path()).unwrap()).unwrap();
        let stamp = raw[0]["viewedAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_history_appends_duplicates_in_order() {
        let (storage, _temp) = create_test_storage();
        let a = Quote::new("A", "X", ["life"]);
        let b = Quote::new("B", "Y", ["work"]);

        storage.add_to_history(&a).unwrap();
        storage.add_to_history(&b).unwrap();
        storage.add_to_history(&a).unwrap();

        let history = storage.get_history().unwrap();
        let contents: Vec<&str> = history.iter().map(|e| e.quote.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "B", "A"]);
        assert!(history.windows(2).all(|w| w[0].viewed_at <= w[1].viewed_at));
    }

    #[test]
    fn test_history_stamp_never_decreases() {
        let (storage, _temp) = create_test_storage();
        let future = Utc::now() + chrono::Duration::hours(1);
        let seeded = vec![HistoryEntry::new(Quote::new("A", "X", ["life"]), future)];
        write_json(&storage.history_path(), &seeded).unwrap();

        let entry = storage.add_to_history(&Quote::new("B", "Y", ["work"])).unwrap();
        assert_eq!(entry.viewed_at, future);
    }

    #[test]
    fn test_export_favorites_format() {
        let (storage, temp) = create_test_storage();
        storage.add_favorite(&Quote::new("Hi", "Z", Vec::<String>::new())).unwrap();

        let out = temp.path().join("favorites.txt");
        fs::write(&out, "old contents that must go away").unwrap();

        let count = storage.export_favorites(&out).unwrap();
        assert_eq!(count, 1);
        assert_eq!(fs::read_to_string(&out).unwrap(), "\"Hi\" - Z\n");
    }

    #[test]
    fn test_export_into_missing_directory_is_write_error() {
        let (storage, temp) = create_test_storage();
        let out = temp.path().join("no").join("such").join("dir.txt");

        let err = storage.export_favorites(&out).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }

    #[test]
    fn test_settings_default_and_round_trip() {
        let (storage, _temp) = create_test_storage();
        assert_eq!(storage.load_settings().unwrap(), Settings::default());

        let settings = Settings {
            notification_time: NotificationTime::new(7, 45).unwrap(),
            notifications_enabled: true,
        };
        storage.save_settings(&settings).unwrap();
        assert_eq!(storage.load_settings().unwrap(), settings);
    }
}
