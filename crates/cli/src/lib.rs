//! Fitlog - workout log for strength, cardio and endurance exercises.
//!
//! [`Tracker`] is the entry point used by every front end: it validates
//! console input, appends entries to the log and builds progress reports.
//! [`Console`] is the interactive menu on top of it.

#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod tracker;

pub use config::Config;
pub use console::Console;
pub use tracker::{Tracker, TrackerError};
