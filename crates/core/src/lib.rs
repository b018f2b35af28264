//! Fitlog core data models.
//!
//! This crate defines the workout entries recorded by fitlog, the text
//! parsers and formatters used at the console boundary, and the line
//! codec used by the backing log file.

#![warn(missing_docs)]

mod entry;
mod error;
mod format;
mod parse;
mod record;

pub use entry::{CardioEntry, EnduranceEntry, EntryKind, LogEntry, StrengthEntry};
pub use error::{RecordError, ValidationError};
pub use format::{format_date, format_distance, format_duration};
pub use parse::{
    parse_count, parse_date, parse_date_on, parse_distance, parse_duration, validate_name,
};
pub use record::{from_record, to_record, FIELD_SEPARATOR};

/// Calendar date type (no time zone).
pub type Date = chrono::NaiveDate;
