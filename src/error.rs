//! Error types for vector construction and clamping.

/// Errors raised by vector construction, `set`, and the clamp family.
///
/// Every failure is raised before any mutation takes place: an operation
/// either fully applies or leaves the vector untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// A sequence argument did not have exactly as many elements as the
    /// vector has axes.
    #[error("array must be of length {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// `clamp` or `limited` was called before both `min` and `max` bounds
    /// were set.
    #[error("min and max bounds must be set before clamping")]
    BoundsNotSet,
}

pub type Result<T> = std::result::Result<T, VectorError>;
