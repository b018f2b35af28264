//! Progress tracking.
//!
//! Compares the oldest and latest entry of each exercise and reports the
//! ones that improved.

#![warn(missing_docs)]

pub mod report;
pub mod tracker;

pub use report::{ExerciseProgress, ProgressDelta, ProgressReport};
pub use tracker::compute_progress;
