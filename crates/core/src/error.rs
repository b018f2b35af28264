//! Error types for entry validation and record decoding.

/// Rejected user input. The log is never touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Exercise name is empty
    #[error("Exercise name must not be empty")]
    EmptyName,

    /// Exercise name contains characters the log file cannot hold
    #[error("Invalid exercise name: {0:?}")]
    InvalidName(String),

    /// Sets is not a whole number
    #[error("Invalid sets: {0:?}")]
    InvalidSets(String),

    /// Reps is not a whole number
    #[error("Invalid reps: {0:?}")]
    InvalidReps(String),

    /// Duration does not match the `<n>h<n>m<n>s` grammar or is zero
    #[error("Invalid duration: {0:?} (use formats like 15m, 2h, 2h30m, 48s)")]
    InvalidDuration(String),

    /// Distance is not a number of meters or kilometers
    #[error("Invalid distance: {0:?} (use formats like 100m, 2km)")]
    InvalidDistance(String),

    /// Date is not dd/MM/yyyy or not a real calendar date
    #[error("Invalid date: {0:?} (use dd/MM/yyyy)")]
    InvalidDate(String),
}

/// A log file line that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// First field is not a known entry kind
    #[error("Unknown entry kind: {0:?}")]
    UnknownKind(String),

    /// Wrong number of `;`-separated fields
    #[error("Expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields the kind requires
        expected: usize,
        /// Fields present on the line
        found: usize,
    },

    /// The name field is blank
    #[error("Empty exercise name")]
    EmptyName,

    /// A numeric field failed to parse
    #[error("Invalid number in field {field}: {value:?}")]
    InvalidNumber {
        /// Field name
        field: &'static str,
        /// Raw field text
        value: String,
    },

    /// The date field is not ISO `yyyy-MM-dd`
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

impl RecordError {
    /// Whether this record should be dropped without a warning.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, RecordError::UnknownKind(_))
    }
}
