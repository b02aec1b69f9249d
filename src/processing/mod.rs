//! Prefix comparison logic.
//!
//! - [`overlap`] - family gate and overlap classification

mod overlap;

// Re-export public functions
pub use overlap::{classify, comparable, is_same_as, is_subset_of, is_superset_of};
