use std::path::PathBuf;

use anyhow::{Context, Result};

use motivation_lib::quotes::{Quote, QuoteCatalog};
use motivation_lib::storage::{HistoryEntry, QuoteStorage, Settings};

/// Shared application state for CLI commands
pub struct App {
    pub catalog: QuoteCatalog,
    pub storage: QuoteStorage,
}

impl App {
    /// Initialize from the given data directory, or the default one
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => QuoteStorage::default_data_dir().context("Failed to get data directory")?,
        };

        let storage = QuoteStorage::new(data_dir);
        storage.init().context("Failed to initialize storage")?;

        Ok(Self {
            catalog: QuoteCatalog::builtin(),
            storage,
        })
    }

    /// Pick a random quote and record it in history
    pub fn next_quote(&self, tag: Option<&str>) -> Result<Option<HistoryEntry>> {
        let Some(quote) = self.catalog.random_quote(tag) else {
            return Ok(None);
        };

        let entry = self
            .storage
            .add_to_history(quote)
            .context("Failed to record quote in history")?;
        Ok(Some(entry))
    }

    /// The most recently viewed quote, if any
    pub fn current_quote(&self) -> Result<Option<Quote>> {
        let history = self.storage.get_history().context("Failed to read history")?;
        Ok(history.into_iter().last().map(|e| e.quote))
    }

    pub fn favorites(&self) -> Result<Vec<Quote>> {
        self.storage.get_favorites().context("Failed to read favorites")
    }

    pub fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.storage.get_history().context("Failed to read history")
    }

    pub fn settings(&self) -> Result<Settings> {
        self.storage.load_settings().context("Failed to read settings")
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.storage.save_settings(settings).context("Failed to save settings")
    }
}
