//! Log entry model - one recorded workout.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::{format_date, format_distance, format_duration};
use crate::Date;

/// The kind of workout an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Sets of repetitions (push-ups, squats)
    Strength,
    /// Timed sets (plank, skipping)
    Cardio,
    /// Distance over time (running, swimming)
    Endurance,
}

impl EntryKind {
    /// Tag used in the log file.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Strength => "strength",
            EntryKind::Cardio => "cardio",
            EntryKind::Endurance => "endurance",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Strength => "Strength",
            EntryKind::Cardio => "Cardio",
            EntryKind::Endurance => "Endurance",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = crate::RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(EntryKind::Strength),
            "cardio" => Ok(EntryKind::Cardio),
            "endurance" => Ok(EntryKind::Endurance),
            other => Err(crate::RecordError::UnknownKind(other.to_string())),
        }
    }
}

/// A strength exercise, e.g. 3 sets of 10 push-ups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthEntry {
    /// Exercise name, as typed
    pub name: String,

    /// Number of sets
    pub sets: u32,

    /// Repetitions per set
    pub reps: u32,

    /// Day of the workout
    pub date: Date,
}

impl StrengthEntry {
    /// Create a new strength entry.
    pub fn new(name: impl Into<String>, sets: u32, reps: u32, date: Date) -> Self {
        Self { name: name.into(), sets, reps, date }
    }

    /// Total repetitions across all sets.
    pub fn total_reps(&self) -> u64 {
        u64::from(self.sets) * u64::from(self.reps)
    }
}

/// A cardio exercise: timed sets, e.g. 2 sets of a 1 minute plank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardioEntry {
    /// Exercise name, as typed
    pub name: String,

    /// Duration of one set, in seconds
    pub duration_secs: u32,

    /// Number of sets
    pub sets: u32,

    /// Day of the workout
    pub date: Date,
}

impl CardioEntry {
    /// Create a new cardio entry.
    pub fn new(name: impl Into<String>, duration_secs: u32, sets: u32, date: Date) -> Self {
        Self { name: name.into(), duration_secs, sets, date }
    }

    /// Per-set duration as `HhMmSs`.
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_secs)
    }

    /// Time under work across all sets, in seconds.
    pub fn total_secs(&self) -> u64 {
        u64::from(self.duration_secs) * u64::from(self.sets)
    }
}

/// An endurance exercise: a distance covered in some time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnduranceEntry {
    /// Exercise name, as typed
    pub name: String,

    /// Distance in meters
    pub distance_m: u32,

    /// Duration in seconds
    pub duration_secs: u32,

    /// Day of the workout
    pub date: Date,
}

impl EnduranceEntry {
    /// Create a new endurance entry.
    pub fn new(name: impl Into<String>, distance_m: u32, duration_secs: u32, date: Date) -> Self {
        Self { name: name.into(), distance_m, duration_secs, date }
    }

    /// Distance as meters or kilometers.
    pub fn formatted_distance(&self) -> String {
        format_distance(self.distance_m)
    }

    /// Duration as `HhMmSs`.
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_secs)
    }

    /// Average speed in meters per minute, `None` for a zero duration.
    pub fn speed(&self) -> Option<f64> {
        if self.duration_secs == 0 {
            return None;
        }
        Some(f64::from(self.distance_m) / (f64::from(self.duration_secs) / 60.0))
    }
}

/// One recorded workout of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LogEntry {
    /// Strength entry
    Strength(StrengthEntry),
    /// Cardio entry
    Cardio(CardioEntry),
    /// Endurance entry
    Endurance(EnduranceEntry),
}

impl LogEntry {
    /// Kind of this entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            LogEntry::Strength(_) => EntryKind::Strength,
            LogEntry::Cardio(_) => EntryKind::Cardio,
            LogEntry::Endurance(_) => EntryKind::Endurance,
        }
    }

    /// Exercise name.
    pub fn name(&self) -> &str {
        match self {
            LogEntry::Strength(e) => &e.name,
            LogEntry::Cardio(e) => &e.name,
            LogEntry::Endurance(e) => &e.name,
        }
    }

    /// Day of the workout.
    pub fn date(&self) -> Date {
        match self {
            LogEntry::Strength(e) => e.date,
            LogEntry::Cardio(e) => e.date,
            LogEntry::Endurance(e) => e.date,
        }
    }

    /// Log file line for this entry, without the line terminator.
    pub fn to_record(&self) -> String {
        crate::record::to_record(self)
    }
}

impl From<StrengthEntry> for LogEntry {
    fn from(entry: StrengthEntry) -> Self {
        LogEntry::Strength(entry)
    }
}

impl From<CardioEntry> for LogEntry {
    fn from(entry: CardioEntry) -> Self {
        LogEntry::Cardio(entry)
    }
}

impl From<EnduranceEntry> for LogEntry {
    fn from(entry: EnduranceEntry) -> Self {
        LogEntry::Endurance(entry)
    }
}

/// Display form, e.g. `18/05/2025 - Strength: Push-ups: 3 sets of 10 reps`.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: {}: ", format_date(self.date()), self.kind(), self.name())?;
        match self {
            LogEntry::Strength(e) => write!(f, "{} sets of {} reps", e.sets, e.reps),
            LogEntry::Cardio(e) => write!(f, "{} sets of {}", e.sets, e.formatted_duration()),
            LogEntry::Endurance(e) => {
                write!(f, "{} in {}", e.formatted_distance(), e.formatted_duration())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_strength_total_reps() {
        let entry = StrengthEntry::new("Push-ups", 3, 10, day(2025, 5, 18));
        assert_eq!(entry.total_reps(), 30);
    }

    #[test]
    fn test_cardio_total_secs() {
        let entry = CardioEntry::new("Plank", 60, 2, day(2025, 5, 18));
        assert_eq!(entry.total_secs(), 120);
        assert_eq!(entry.formatted_duration(), "1m0s");
    }

    #[test]
    fn test_endurance_speed() {
        let entry = EnduranceEntry::new("Running", 1000, 300, day(2025, 5, 18));
        assert_eq!(entry.speed(), Some(200.0));
    }

    #[test]
    fn test_endurance_speed_zero_duration() {
        let entry = EnduranceEntry::new("Running", 1000, 0, day(2025, 5, 18));
        assert_eq!(entry.speed(), None);
    }

    #[test]
    fn test_display_strings() {
        let strength: LogEntry = StrengthEntry::new("Push-ups", 3, 10, day(2025, 5, 18)).into();
        assert_eq!(strength.to_string(), "18/05/2025 - Strength: Push-ups: 3 sets of 10 reps");

        let cardio: LogEntry = CardioEntry::new("Plank", 60, 2, day(2025, 5, 18)).into();
        assert_eq!(cardio.to_string(), "18/05/2025 - Cardio: Plank: 2 sets of 1m0s");

        let endurance: LogEntry = EnduranceEntry::new("Swimming", 1000, 1200, day(2025, 5, 18)).into();
        assert_eq!(endurance.to_string(), "18/05/2025 - Endurance: Swimming: 1.0km in 20m0s");
    }

    #[test]
    fn test_accessors() {
        let entry: LogEntry = CardioEntry::new("Skipping", 90, 3, day(2024, 1, 2)).into();
        assert_eq!(entry.kind(), EntryKind::Cardio);
        assert_eq!(entry.name(), "Skipping");
        assert_eq!(entry.date(), day(2024, 1, 2));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("endurance".parse::<EntryKind>(), Ok(EntryKind::Endurance));
        assert!("yoga".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_json_shape() {
        let entry: LogEntry = StrengthEntry::new("Squats", 4, 8, day(2025, 3, 1)).into();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "strength");
        assert_eq!(json["date"], "2025-03-01");

        let back: LogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
