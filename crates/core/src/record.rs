//! Line codec for the backing log file.
//!
//! One entry per line, fields separated by `;`, dates in ISO `yyyy-MM-dd`:
//!
//! ```text
//! strength;Push-ups;3;10;2025-05-18
//! cardio;Plank;60;2;2025-05-18
//! endurance;Swimming;1000;1200;2025-05-18
//! ```

use crate::{CardioEntry, Date, EnduranceEntry, EntryKind, LogEntry, RecordError, StrengthEntry};

/// Field separator used on every line.
pub const FIELD_SEPARATOR: char = ';';

const FIELDS_PER_RECORD: usize = 5;
const ISO_DATE: &str = "%Y-%m-%d";

/// Encode an entry as one log line, without the line terminator.
pub fn to_record(entry: &LogEntry) -> String {
    let (a, b) = match entry {
        LogEntry::Strength(e) => (e.sets, e.reps),
        LogEntry::Cardio(e) => (e.duration_secs, e.sets),
        LogEntry::Endurance(e) => (e.distance_m, e.duration_secs),
    };
    let sep = FIELD_SEPARATOR;
    format!(
        "{kind}{sep}{name}{sep}{a}{sep}{b}{sep}{date}",
        kind = entry.kind().as_str(),
        name = entry.name(),
        date = entry.date().format(ISO_DATE),
    )
}

/// Decode one non-blank log line.
pub fn from_record(line: &str) -> Result<LogEntry, RecordError> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(FIELD_SEPARATOR).collect();
    let kind: EntryKind = fields[0].parse()?;
    // Trailing empty fields (a stray `;` at the end) are ignored
    let used = fields
        .iter()
        .rposition(|f| !f.is_empty())
        .map_or(0, |last| last + 1)
        .max(FIELDS_PER_RECORD.min(fields.len()));
    if used != FIELDS_PER_RECORD {
        return Err(RecordError::FieldCount {
            expected: FIELDS_PER_RECORD,
            found: used,
        });
    }

    if fields[1].trim().is_empty() {
        return Err(RecordError::EmptyName);
    }
    let name = fields[1].to_string();
    let date = Date::parse_from_str(fields[4], ISO_DATE)
        .map_err(|_| RecordError::InvalidDate(fields[4].to_string()))?;

    let entry = match kind {
        EntryKind::Strength => StrengthEntry::new(
            name,
            number("sets", fields[2])?,
            number("reps", fields[3])?,
            date,
        )
        .into(),
        EntryKind::Cardio => CardioEntry::new(
            name,
            number("duration", fields[2])?,
            number("sets", fields[3])?,
            date,
        )
        .into(),
        EntryKind::Endurance => EnduranceEntry::new(
            name,
            number("distance", fields[2])?,
            number("duration", fields[3])?,
            date,
        )
        .into(),
    };
    Ok(entry)
}

fn number(field: &'static str, value: &str) -> Result<u32, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
