//! Progress computation.

use std::collections::BTreeMap;

use fitlog_core::{EntryKind, LogEntry};
use tracing::debug;

use crate::{ExerciseProgress, ProgressDelta, ProgressReport};

/// Compare the oldest and latest entry of every exercise.
///
/// Entries are grouped by kind and by lowercased name. Groups with fewer
/// than two entries are skipped. Each group is sorted by date, keeping log
/// order for equal dates, and only strictly positive deltas are reported.
pub fn compute_progress(entries: &[LogEntry]) -> ProgressReport {
    let mut groups: BTreeMap<(EntryKind, String), Vec<&LogEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry((entry.kind(), entry.name().to_lowercase()))
            .or_default()
            .push(entry);
    }

    let mut improvements = Vec::new();
    for ((kind, name), mut group) in groups {
        if group.len() < 2 {
            continue;
        }
        group.sort_by_key(|e| e.date());

        let (oldest, latest) = (group[0], group[group.len() - 1]);
        match delta(oldest, latest) {
            Some(delta) => improvements.push(ExerciseProgress {
                oldest: oldest.clone(),
                latest: latest.clone(),
                delta,
            }),
            None => debug!(%kind, %name, "No improvement"),
        }
    }

    ProgressReport::from_improvements(improvements)
}

fn delta(oldest: &LogEntry, latest: &LogEntry) -> Option<ProgressDelta> {
    match (oldest, latest) {
        (LogEntry::Strength(a), LogEntry::Strength(b)) => b
            .total_reps()
            .checked_sub(a.total_reps())
            .filter(|d| *d > 0)
            .map(ProgressDelta::Reps),
        (LogEntry::Cardio(a), LogEntry::Cardio(b)) => b
            .total_secs()
            .checked_sub(a.total_secs())
            .filter(|d| *d > 0)
            .map(ProgressDelta::Seconds),
        (LogEntry::Endurance(a), LogEntry::Endurance(b)) => {
            let diff = b.speed()? - a.speed()?;
            (diff > 0.0).then_some(ProgressDelta::Speed(diff))
        }
        _ => None,
    }
}
