//! Progress report model.

use std::fmt;

use fitlog_core::{format_date, EntryKind, LogEntry};

/// Improvement between the oldest and latest entry of an exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressDelta {
    /// More total reps (strength)
    Reps(u64),
    /// More total time under work, in seconds (cardio)
    Seconds(u64),
    /// Faster average speed, in meters per minute (endurance)
    Speed(f64),
}

/// Display form: `+10 reps`, `+2 min`, `+12.50 m/min` or `+1.20 km/min`.
///
/// Minutes are truncated, so a gain under a minute shows as `+0 min`.
impl fmt::Display for ProgressDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ProgressDelta::Reps(reps) => write!(f, "+{reps} reps"),
            ProgressDelta::Seconds(secs) => write!(f, "+{} min", secs / 60),
            ProgressDelta::Speed(speed) if speed >= 1000.0 => {
                write!(f, "+{:.2} km/min", speed / 1000.0)
            }
            ProgressDelta::Speed(speed) => write!(f, "+{speed:.2} m/min"),
        }
    }
}

/// Progress of one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseProgress {
    /// Earliest entry by date
    pub oldest: LogEntry,

    /// Latest entry by date
    pub latest: LogEntry,

    /// How much the latest entry improved on the oldest
    pub delta: ProgressDelta,
}

impl ExerciseProgress {
    /// Kind of exercise.
    pub fn kind(&self) -> EntryKind {
        self.latest.kind()
    }

    /// Exercise name, as typed on the latest entry.
    pub fn name(&self) -> &str {
        self.latest.name()
    }

    /// Summary of the oldest entry, e.g. `3x10 on 18/05/2025`.
    pub fn oldest_summary(&self) -> String {
        summary(&self.oldest)
    }

    /// Summary of the latest entry.
    pub fn latest_summary(&self) -> String {
        summary(&self.latest)
    }

    /// Delta as shown to the user.
    pub fn formatted_delta(&self) -> String {
        self.delta.to_string()
    }
}

fn summary(entry: &LogEntry) -> String {
    let date = format_date(entry.date());
    match entry {
        LogEntry::Strength(e) => format!("{}x{} on {}", e.sets, e.reps, date),
        LogEntry::Cardio(e) => format!("{} sets of {} on {}", e.sets, e.formatted_duration(), date),
        LogEntry::Endurance(e) => {
            format!("{} in {} on {}", e.formatted_distance(), e.formatted_duration(), date)
        }
    }
}

/// Result of a progress computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressReport {
    /// No exercise has improved yet
    NoProgress,
    /// Exercises that improved, strength first, then cardio, then endurance
    Improvements(Vec<ExerciseProgress>),
}

impl ProgressReport {
    /// Build a report from improvements, mapping none to [`ProgressReport::NoProgress`].
    pub fn from_improvements(improvements: Vec<ExerciseProgress>) -> Self {
        if improvements.is_empty() {
            ProgressReport::NoProgress
        } else {
            ProgressReport::Improvements(improvements)
        }
    }

    /// Whether nothing improved.
    pub fn is_empty(&self) -> bool {
        matches!(self, ProgressReport::NoProgress)
    }

    /// Improved exercises; empty for [`ProgressReport::NoProgress`].
    pub fn records(&self) -> &[ExerciseProgress] {
        match self {
            ProgressReport::NoProgress => &[],
            ProgressReport::Improvements(records) => records,
        }
    }
}
