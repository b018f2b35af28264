//! The in-memory workout log and its backing resource.

use fitlog_core::LogEntry;
use tracing::{info, warn};

use super::{LogBackend, Result, StorageError};

/// Ordered log of entries, flushed to its backend after every mutation.
///
/// The store is the single owner of the log. Callers read through
/// [`LogStore::entries`] and mutate only through [`LogStore::append`] and
/// [`LogStore::clear`].
#[derive(Debug)]
pub struct LogStore<B: LogBackend> {
    backend: B,
    entries: Vec<LogEntry>,
}

impl<B: LogBackend> LogStore<B> {
    /// Create an empty store without reading the backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: Vec::new(),
        }
    }

    /// Create a store holding whatever the backend can provide.
    ///
    /// A read failure is logged and returned alongside the store, which then
    /// holds the entries read before the failure.
    pub fn open(backend: B) -> (Self, Option<StorageError>) {
        let mut store = Self::new(backend);
        let warning = store.reload();
        (store, warning)
    }

    /// Replace the in-memory log with the backend's contents.
    pub fn reload(&mut self) -> Option<StorageError> {
        let report = self.backend.load();
        self.entries = report.entries;
        if report.skipped > 0 {
            warn!("Skipped {} malformed log lines", report.skipped);
        }
        if let Some(e) = &report.warning {
            warn!("Error loading log: {}", e);
        }
        report.warning
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The backing resource.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Append an entry and save the full log.
    ///
    /// The entry stays in memory even if the save fails.
    pub fn append(&mut self, entry: LogEntry) -> Result<()> {
        self.entries.push(entry);
        self.flush()
    }

    /// Empty the log and its backing resource.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.backend.clear().inspect_err(|e| warn!("Error clearing log: {}", e))?;
        info!("Log cleared");
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.backend
            .save(&self.entries)
            .inspect_err(|e| warn!("Error saving log: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStorage, TextFileStorage};
    use fitlog_core::{CardioEntry, Date, EnduranceEntry, StrengthEntry};
    use tempfile::tempdir;

    fn day(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_open_empty_backend() {
        let (store, warning) = LogStore::open(MemoryStorage::new());
        assert!(store.is_empty());
        assert!(warning.is_none());
    }

    #[test]
    fn test_append_preserves_order_and_persists() {
        let mut store = LogStore::new(MemoryStorage::new());

        store
            .append(StrengthEntry::new("Push-ups", 3, 10, day(2025, 5, 18)).into())
            .unwrap();
        store
            .append(CardioEntry::new("Plank", 60, 2, day(2025, 5, 17)).into())
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].name(), "Push-ups");
        assert_eq!(store.entries()[1].name(), "Plank");
        assert_eq!(
            store.backend().lines(),
            ["strength;Push-ups;3;10;2025-05-18", "cardio;Plank;60;2;2025-05-17"]
        );
    }

    #[test]
    fn test_append_keeps_entry_when_save_fails() {
        let mut store = LogStore::new(MemoryStorage::new().fail_writes(true));

        let result = store.append(StrengthEntry::new("Dips", 2, 8, day(2025, 5, 18)).into());

        assert!(result.is_err());
        assert_eq!(store.len(), 1);
        assert!(store.backend().lines().is_empty());
    }

    #[test]
    fn test_clear_empties_memory_and_backend() {
        let backend = MemoryStorage::with_lines([
            "strength;Push-ups;3;10;2025-05-18",
            "cardio;Plank;60;2;2025-05-18",
        ]);
        let (mut store, _) = LogStore::open(backend);
        assert_eq!(store.len(), 2);

        store.clear().unwrap();

        assert!(store.is_empty());
        assert!(store.backend().lines().is_empty());
        assert!(store.reload().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");

        let (mut store, _) = LogStore::open(TextFileStorage::new(&path));
        store
            .append(EnduranceEntry::new("Running", 5000, 1500, day(2025, 5, 18)).into())
            .unwrap();
        drop(store);

        let (store, warning) = LogStore::open(TextFileStorage::new(&path));
        assert!(warning.is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].name(), "Running");
    }

    #[test]
    fn test_clear_then_load_file_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");

        let (mut store, _) = LogStore::open(TextFileStorage::new(&path));
        store
            .append(StrengthEntry::new("Squats", 5, 5, day(2025, 5, 18)).into())
            .unwrap();
        store.clear().unwrap();

        let (reopened, _) = LogStore::open(TextFileStorage::new(&path));
        assert!(reopened.is_empty());
    }
}
