//! Error handling and result types for tree operations.
//!
//! The surface is small on purpose: construction can reject a capacity,
//! fallible lookups can miss, and the validation pass can detect a corrupted
//! structure. Everything else either succeeds or reports through its return
//! value (duplicate inserts are a `bool`, not an error).

use std::fmt;

/// Error type for [`MwayTreeSet`](crate::MwayTreeSet) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MwayTreeError {
    /// Construction was given an unusable node capacity.
    InvalidCapacity(String),
    /// A lookup that promises an element found none.
    ValueNotFound,
    /// A consistency check failed; the structure can no longer be trusted.
    CorruptedTree(String),
}

impl MwayTreeError {
    /// Create an InvalidCapacity error with context
    pub fn invalid_capacity(capacity: usize, min_required: usize) -> Self {
        Self::InvalidCapacity(format!(
            "Capacity {} is invalid (minimum required: {})",
            capacity, min_required
        ))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }
}

impl fmt::Display for MwayTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MwayTreeError::InvalidCapacity(msg) => write!(f, "Invalid capacity: {}", msg),
            MwayTreeError::ValueNotFound => write!(f, "Value not found"),
            MwayTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for MwayTreeError {}

/// Result type alias for fallible tree operations.
pub type TreeResult<T> = Result<T, MwayTreeError>;

/// Result type alias for constructors.
pub type InitResult<T> = Result<T, MwayTreeError>;
