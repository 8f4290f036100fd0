//! Error types for rowkit.
//!
//! Every error in this crate is a caller configuration mistake: a row index
//! the model does not have, or a renderer kind nobody registered. There is
//! no I/O and no transient failure class, so nothing here is retried; errors
//! are synchronous and local to a single callback dispatch.

/// Result type alias for rowkit operations.
pub type Result<T> = std::result::Result<T, RowKitError>;

/// Errors that can occur during callback dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowKitError {
    /// A dispatch named a row the model does not contain.
    #[error("row index {index} out of bounds for {len} rows")]
    RowOutOfBounds { index: usize, len: usize },

    /// A row model names a renderer kind with no registered factory.
    #[error("no renderer factory registered for kind '{kind}'")]
    UnknownRendererKind { kind: String },
}

impl RowKitError {
    /// Create an out-of-bounds error.
    pub fn row_out_of_bounds(index: usize, len: usize) -> Self {
        Self::RowOutOfBounds { index, len }
    }

    /// Create an unknown-renderer error.
    pub fn unknown_renderer_kind(kind: impl Into<String>) -> Self {
        Self::UnknownRendererKind { kind: kind.into() }
    }
}
