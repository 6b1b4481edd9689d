use thiserror::Error;

pub type Result<T> = std::result::Result<T, UrlifyError>;

/// Precondition failures of the encoder. Both are detected before the buffer is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UrlifyError {
    /// The logical length points past the end of the buffer.
    #[error("logical length {length} exceeds buffer capacity {capacity}")]
    InvalidLength { length: usize, capacity: usize },

    /// The padding after the logical content is too short for the expansion.
    #[error("encoded text needs {needed} chars but the buffer only holds {available}")]
    InsufficientCapacity { needed: usize, available: usize },
}
