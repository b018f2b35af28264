//! In-memory storage backend.

use fitlog_core::LogEntry;

use super::{decode_lines, LoadReport, LogBackend, Result, StorageError};

/// Backend that keeps encoded lines in memory.
///
/// Lines go through the same codec as the text file, so a store built on
/// this behaves like one built on a real file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    lines: Vec<String>,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend holding these raw lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            fail_writes: false,
        }
    }

    /// Make every subsequent save fail.
    pub fn fail_writes(mut self, fail: bool) -> Self {
        self.fail_writes = fail;
        self
    }

    /// Raw lines as last saved.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LogBackend for MemoryStorage {
    fn load(&self) -> LoadReport {
        decode_lines(self.lines.iter().cloned().map(Ok))
    }

    fn save(&mut self, entries: &[LogEntry]) -> Result<()> {
        if self.fail_writes {
            return Err(StorageError::Other("log is read-only".to_string()));
        }
        self.lines = entries.iter().map(LogEntry::to_record).collect();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlog_core::{Date, StrengthEntry};

    #[test]
    fn test_save_replaces_lines() {
        let date = Date::from_ymd_opt(2025, 5, 18).unwrap();
        let mut storage = MemoryStorage::with_lines(["cardio;Plank;60;2;2025-05-18"]);

        storage
            .save(&[StrengthEntry::new("Squats", 3, 12, date).into()])
            .unwrap();

        assert_eq!(storage.lines(), ["strength;Squats;3;12;2025-05-18"]);
    }

    #[test]
    fn test_failing_writes_keep_lines() {
        let mut storage = MemoryStorage::with_lines(["cardio;Plank;60;2;2025-05-18"]).fail_writes(true);

        assert!(storage.clear().is_err());
        assert_eq!(storage.lines().len(), 1);
    }
}
