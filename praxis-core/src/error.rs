use thiserror::Error;

/// Errors raised when a form draft is rejected at the point of entry.
///
/// Rejection never partially applies: the collection the draft was aimed at
/// is left untouched and the message is surfaced to the submitter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{field} is not a valid non-negative number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("hours spent cannot exceed 12 for a single entry (got {hours})")]
    HoursExceeded { hours: f64 },
}
