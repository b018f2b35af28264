//! Storage trait abstraction.

use fitlog_core::{from_record, LogEntry};
use tracing::{trace, warn};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// None of these are fatal: a failed load yields what could be read, and a
/// failed save leaves the in-memory log as it was.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result of reading a backing resource.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Entries decoded, in file order
    pub entries: Vec<LogEntry>,

    /// Lines of a known kind dropped because they were malformed
    pub skipped: usize,

    /// Read failure that cut the load short
    pub warning: Option<StorageError>,
}

/// Backing resource for the workout log.
///
/// This trait allows different storage backends to be plugged in.
pub trait LogBackend {
    /// Read every entry. A missing resource is an empty log, not an error.
    fn load(&self) -> LoadReport;

    /// Overwrite the resource with exactly these entries.
    fn save(&mut self, entries: &[LogEntry]) -> Result<()>;

    /// Overwrite the resource with nothing.
    fn clear(&mut self) -> Result<()> {
        self.save(&[])
    }
}

/// Decode log lines into a [`LoadReport`].
///
/// Blank lines are skipped and unknown kinds are dropped silently. Lines of
/// a known kind that fail to decode are counted in `skipped`. The first read
/// error stops decoding and is kept as the report's warning.
pub fn decode_lines<I>(lines: I) -> LoadReport
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut report = LoadReport::default();
    for (index, line) in lines.into_iter().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                report.warning = Some(e.into());
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match from_record(&line) {
            Ok(entry) => report.entries.push(entry),
            Err(e) if e.is_unrecognized() => {
                trace!(line = index + 1, "Dropping record: {}", e);
            }
            Err(e) => {
                warn!(line = index + 1, "Skipping malformed record: {}", e);
                report.skipped += 1;
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlog_core::EntryKind;

    fn ok_lines(lines: &[&str]) -> Vec<std::io::Result<String>> {
        lines.iter().map(|l| Ok(l.to_string())).collect()
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let report = decode_lines(ok_lines(&[
            "",
            "strength;Push-ups;3;10;2025-05-18",
            "   ",
            "cardio;Plank;60;2;2025-05-18",
        ]));
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.skipped, 0);
        assert!(report.warning.is_none());
    }

    #[test]
    fn test_decode_drops_unknown_kind() {
        let report = decode_lines(ok_lines(&[
            "yoga;Sun salute;10;2;2025-05-18",
            "cardio;Plank;60;2;2025-05-18",
        ]));
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].kind(), EntryKind::Cardio);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_decode_counts_malformed() {
        let report = decode_lines(ok_lines(&[
            "strength;Push-ups;x;10;2025-05-18",
            "endurance;Running;5000;1500;2025-05-18",
        ]));
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_decode_stops_on_read_error() {
        let lines = vec![
            Ok("strength;Push-ups;3;10;2025-05-18".to_string()),
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone")),
            Ok("cardio;Plank;60;2;2025-05-18".to_string()),
        ];
        let report = decode_lines(lines);
        assert_eq!(report.entries.len(), 1);
        assert!(matches!(report.warning, Some(StorageError::Io(_))));
    }
}
