//! Output formatting for evaluation results.
//!
//! - [`terminal`] - plain token or JSON line for stdout

mod terminal;

pub use terminal::{format_result, Report};
