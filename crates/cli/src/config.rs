//! Runtime configuration.

use std::path::PathBuf;

/// Log file used when none is given.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Configuration for a fitlog session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backing log file
    pub log_file: PathBuf,
    /// Clear the terminal before each console screen
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            clear_screen: true,
        }
    }
}
