//! In-memory ordered stores for goals and projects.
//!
//! # Responsibility
//! - Own the ordered goal and project collections.
//! - Enforce positional bounds and write-time validation.
//!
//! # Invariants
//! - List order is insertion order.
//! - Deleting position `i` shifts every later position down by one.
//! - Stores never touch each other; cross-store rules live in `service`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod goal_store;
pub mod project_store;

/// Result type for positional store operations.
pub type StoreResult<T> = Result<T, IndexError>;

/// Operation referenced a position outside the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// Requested position.
    pub index: usize,
    /// Collection length at the time of the request.
    pub len: usize,
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl Error for IndexError {}

pub(crate) fn check_index(index: usize, len: usize) -> StoreResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(IndexError { index, len })
    }
}
