//! Workout tracking service.
//!
//! Every operation the front ends need goes through [`Tracker`]: adding an
//! exercise from raw console text, listing the log, clearing it and
//! reporting progress.

use fitlog_core::{
    parse_count, parse_date, parse_date_on, parse_distance, parse_duration, validate_name, CardioEntry, Date,
    EnduranceEntry, LogEntry, StrengthEntry, ValidationError,
};
use fitlog_progress::{compute_progress, ProgressReport};
use fitlog_storage::{LogBackend, LogStore, StorageError};
use tracing::{debug, info};

/// Errors returned by tracker operations.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Input was rejected and the log is unchanged
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The log changed in memory but could not be written out
    #[error("Log not saved: {0}")]
    Storage(#[from] StorageError),
}

impl TrackerError {
    /// Whether the operation still took effect in memory.
    pub fn is_warning(&self) -> bool {
        matches!(self, TrackerError::Storage(_))
    }
}

/// Workout log service over a storage backend.
pub struct Tracker<B: LogBackend> {
    store: LogStore<B>,
    today: Option<Date>,
}

impl<B: LogBackend> Tracker<B> {
    /// Open a tracker, loading the existing log from `backend`.
    ///
    /// A load failure is returned as a warning; the tracker then starts with
    /// whatever could be read.
    pub fn open(backend: B) -> (Self, Option<StorageError>) {
        let (store, warning) = LogStore::open(backend);
        info!("Opened log with {} entries", store.len());
        (Self { store, today: None }, warning)
    }

    /// Use a fixed date for blank date input instead of the local clock.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    fn parse_date(&self, text: &str) -> Result<Date, ValidationError> {
        match self.today {
            Some(today) => parse_date_on(text, today),
            None => parse_date(text),
        }
    }

    /// Add a strength exercise from console text.
    pub fn add_strength_exercise(
        &mut self,
        name: &str,
        sets: &str,
        reps: &str,
        date: &str,
    ) -> Result<(), TrackerError> {
        let name = validate_name(name)?;
        let sets = parse_count(sets).ok_or_else(|| ValidationError::InvalidSets(sets.to_string()))?;
        let reps = parse_count(reps).ok_or_else(|| ValidationError::InvalidReps(reps.to_string()))?;
        let date = self.parse_date(date)?;
        self.append(StrengthEntry::new(name, sets, reps, date).into())
    }

    /// Add a cardio exercise from console text.
    pub fn add_cardio_exercise(
        &mut self,
        name: &str,
        duration: &str,
        sets: &str,
        date: &str,
    ) -> Result<(), TrackerError> {
        let name = validate_name(name)?;
        let duration = parse_duration(duration)?;
        let sets = parse_count(sets).ok_or_else(|| ValidationError::InvalidSets(sets.to_string()))?;
        let date = self.parse_date(date)?;
        self.append(CardioEntry::new(name, duration, sets, date).into())
    }

    /// Add an endurance exercise from console text.
    pub fn add_endurance_exercise(
        &mut self,
        name: &str,
        distance: &str,
        duration: &str,
        date: &str,
    ) -> Result<(), TrackerError> {
        let name = validate_name(name)?;
        let distance = parse_distance(distance)?;
        let duration = parse_duration(duration)?;
        let date = self.parse_date(date)?;
        self.append(EnduranceEntry::new(name, distance, duration, date).into())
    }

    fn append(&mut self, entry: LogEntry) -> Result<(), TrackerError> {
        debug!(kind = %entry.kind(), name = entry.name(), "Adding entry");
        self.store.append(entry)?;
        Ok(())
    }

    /// Display strings for every entry, in log order.
    pub fn list_entries(&self) -> Vec<String> {
        self.store.entries().iter().map(ToString::to_string).collect()
    }

    /// Every entry, in log order.
    pub fn entries(&self) -> &[LogEntry] {
        self.store.entries()
    }

    /// Remove every entry from memory and from the backing resource.
    pub fn clear_log(&mut self) -> Result<(), TrackerError> {
        self.store.clear()?;
        Ok(())
    }

    /// Progress of every exercise logged at least twice.
    pub fn progress_report(&self) -> ProgressReport {
        compute_progress(self.store.entries())
    }

    /// The underlying store.
    pub fn store(&self) -> &LogStore<B> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlog_progress::ProgressDelta;
    use fitlog_storage::{MemoryStorage, TextFileStorage};
    use tempfile::tempdir;

    fn day(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn tracker() -> Tracker<MemoryStorage> {
        let (tracker, _) = Tracker::open(MemoryStorage::new());
        tracker.with_today(day(2025, 5, 18))
    }

    #[test]
    fn test_add_strength() {
        let mut tracker = tracker();
        tracker.add_strength_exercise("Push-ups", "3", "10", "01/05/2025").unwrap();

        assert_eq!(tracker.list_entries(), ["01/05/2025 - Strength: Push-ups: 3 sets of 10 reps"]);
        assert_eq!(tracker.store().backend().lines(), ["strength;Push-ups;3;10;2025-05-01"]);
    }

    #[test]
    fn test_blank_date_is_today() {
        let mut tracker = tracker();
        tracker.add_cardio_exercise("Plank", "1m", "2", "").unwrap();

        assert_eq!(tracker.entries()[0].date(), day(2025, 5, 18));
    }

    #[test]
    fn test_blank_date_uses_local_clock() {
        let (mut tracker, _) = Tracker::open(MemoryStorage::new());
        let before = chrono::Local::now().date_naive();
        tracker.add_strength_exercise("Push-ups", "3", "10", "").unwrap();
        let after = chrono::Local::now().date_naive();

        let date = tracker.entries()[0].date();
        assert!(before <= date && date <= after);
    }

    #[test]
    fn test_add_endurance() {
        let mut tracker = tracker();
        tracker.add_endurance_exercise("Running", "5km", "25m", "18/05/2025").unwrap();

        assert_eq!(tracker.list_entries(), ["18/05/2025 - Endurance: Running: 5.0km in 25m0s"]);
    }

    #[test]
    fn test_validation_leaves_log_unchanged() {
        let mut tracker = tracker();

        let cases = [
            tracker.add_strength_exercise("", "3", "10", ""),
            tracker.add_strength_exercise("Push-ups", "three", "10", ""),
            tracker.add_strength_exercise("Push-ups", "3", "", ""),
            tracker.add_strength_exercise("Push-ups", "3", "10", "2025-05-01"),
            tracker.add_cardio_exercise("Plank", "60", "2", ""),
            tracker.add_endurance_exercise("Running", "far", "20m", ""),
            tracker.add_endurance_exercise("Running", "5km", "0s", ""),
        ];

        for result in cases {
            let err = result.unwrap_err();
            assert!(matches!(err, TrackerError::Validation(_)));
            assert!(!err.is_warning());
        }
        assert!(tracker.entries().is_empty());
        assert!(tracker.store().backend().lines().is_empty());
    }

    #[test]
    fn test_field_specific_errors() {
        let mut tracker = tracker();

        let err = tracker.add_strength_exercise("Push-ups", "3", "ten", "").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(ValidationError::InvalidReps(_))));

        let err = tracker.add_cardio_exercise("Plank", "1x", "2", "").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(ValidationError::InvalidDuration(_))));

        let err = tracker.add_endurance_exercise("Run", "5km", "20m", "32/01/2025").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(ValidationError::InvalidDate(_))));
    }

    #[test]
    fn test_storage_failure_is_warning() {
        let (tracker, _) = Tracker::open(MemoryStorage::new().fail_writes(true));
        let mut tracker = tracker.with_today(day(2025, 5, 18));

        let err = tracker.add_strength_exercise("Push-ups", "3", "10", "").unwrap_err();

        assert!(err.is_warning());
        assert_eq!(tracker.entries().len(), 1);
    }

    #[test]
    fn test_clear_log() {
        let mut tracker = tracker();
        tracker.add_strength_exercise("Push-ups", "3", "10", "").unwrap();

        tracker.clear_log().unwrap();

        assert!(tracker.list_entries().is_empty());
        assert!(tracker.store().backend().lines().is_empty());
    }

    #[test]
    fn test_progress_report() {
        let mut tracker = tracker();
        assert_eq!(tracker.progress_report(), ProgressReport::NoProgress);

        tracker.add_strength_exercise("pushups", "3", "10", "01/05/2025").unwrap();
        tracker.add_strength_exercise("Pushups", "4", "10", "08/05/2025").unwrap();

        let report = tracker.progress_report();
        assert_eq!(report.records().len(), 1);
        assert_eq!(report.records()[0].delta, ProgressDelta::Reps(10));
    }

    #[test]
    fn test_reopen_file_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");

        let (tracker, _) = Tracker::open(TextFileStorage::new(&path));
        let mut tracker = tracker.with_today(day(2025, 5, 18));
        tracker.add_cardio_exercise("Plank", "1m", "2", "").unwrap();
        tracker.add_strength_exercise("Squats", "3", "12", "").unwrap();
        drop(tracker);

        let (tracker, warning) = Tracker::open(TextFileStorage::new(&path));
        assert!(warning.is_none());
        assert_eq!(
            tracker.list_entries(),
            [
                "18/05/2025 - Cardio: Plank: 2 sets of 1m0s",
                "18/05/2025 - Strength: Squats: 3 sets of 12 reps",
            ]
        );
    }
}
