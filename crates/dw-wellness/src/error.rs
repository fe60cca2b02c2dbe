//! Error types for the wellness companion.

use thiserror::Error;

/// Result type for wellness operations.
pub type WellnessResult<T> = Result<T, WellnessError>;

/// The first rule a submitted profile breaks.
///
/// The messages are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one field is empty or unselected.
    #[error("Please fill out all fields.")]
    MissingFields,

    /// Name shorter than four characters.
    #[error("Name must be at least 4 characters.")]
    NameTooShort,

    /// Age not a number greater than eight.
    #[error("Age must be greater than 8.")]
    AgeTooLow,

    /// Stress level not a number in 1-10.
    #[error("Stress level must be between 1 and 10.")]
    StressOutOfRange,
}

/// Errors raised while reading profile input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WellnessError {
    /// A mood key that is not in the mood table.
    #[error("unknown mood: {0}")]
    UnknownMood(String),

    /// A diet goal key that is not in the diet table.
    #[error("unknown diet goal: {0}")]
    UnknownDietGoal(String),

    /// The profile was rejected by validation.
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}
