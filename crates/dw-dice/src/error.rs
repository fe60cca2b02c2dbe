//! Error types for the dice roller.

/// Errors raised when constructing dice values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A face value outside 1-6.
    #[error("invalid die face: {0} (expected 1-6)")]
    InvalidFace(u32),

    /// A die count other than 1 or 2.
    #[error("invalid dice count: {0} (expected 1 or 2)")]
    InvalidCount(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
