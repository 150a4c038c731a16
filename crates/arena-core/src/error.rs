//! Errors raised while building grids from externally supplied data.

/// Malformed grid input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The flat buffer does not describe exactly one arena.
    #[error("invalid {what} length (expected: {expected}, actual: {actual})")]
    InvalidLength {
        /// Which buffer was rejected.
        what: &'static str,
        /// Required number of elements.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
}
