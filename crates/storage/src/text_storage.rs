//! Flat text file storage implementation.
//!
//! Stores the log as one `;`-separated line per entry. Every save rewrites
//! the whole file, so the file always mirrors the last saved list.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use fitlog_core::LogEntry;
use tracing::debug;

use super::{decode_lines, LoadReport, LogBackend, Result};

/// File-based text storage backend.
#[derive(Debug, Clone)]
pub struct TextFileStorage {
    path: PathBuf,
}

impl TextFileStorage {
    /// Create storage for the given file. Nothing is touched on disk until
    /// the first load or save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogBackend for TextFileStorage {
    fn load(&self) -> LoadReport {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No log file yet");
                return LoadReport::default();
            }
            Err(e) => {
                return LoadReport {
                    warning: Some(e.into()),
                    ..Default::default()
                }
            }
        };

        // Bad bytes become U+FFFD so one mangled line cannot hide the rest
        let lines = BufReader::new(file)
            .split(b'\n')
            .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()));
        let report = decode_lines(lines);
        debug!(
            path = %self.path.display(),
            entries = report.entries.len(),
            skipped = report.skipped,
            "Loaded log"
        );
        report
    }

    fn save(&mut self, entries: &[LogEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        for entry in entries {
            writeln!(writer, "{}", entry.to_record())?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), entries = entries.len(), "Saved log");
        Ok(())
    }
}
