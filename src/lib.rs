//! Overlap status between two network prefixes.
//!
//! Parses two CIDR strings of the same family (IPv4 or IPv6) and reports how
//! the second relates to the first: `same`, `subset`, `superset` or
//! `different`.
//!
//! ```
//! use netoverlap::{evaluate, OverlapStatus};
//! assert_eq!(evaluate("10.0.0.0/8", "10.0.2.10/24")?, OverlapStatus::Subset);
//! # Ok::<(), netoverlap::EvaluationError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{ErrorKind, EvaluationError, Operand, ParseError};
pub use models::{parse, Family, NormalizedPrefix, OverlapStatus};
pub use processing::{classify, comparable};

/// Evaluate the overlap status of `second` from the perspective of `first`.
///
/// # Returns
/// * `Ok(OverlapStatus)` - e.g. `Subset` when `second` lies inside `first`
/// * `Err(EvaluationError)` - if either prefix is malformed or the families differ
pub fn evaluate(first: &str, second: &str) -> Result<OverlapStatus, EvaluationError> {
    log::debug!("#Start evaluate({first}, {second})");

    let n1 = parse(first).map_err(|e| {
        log::warn!("Invalid first prefix {first:?}: {e}");
        EvaluationError::InvalidFirst(e)
    })?;
    let n2 = parse(second).map_err(|e| {
        log::warn!("Invalid second prefix {second:?}: {e}");
        EvaluationError::InvalidSecond(e)
    })?;

    if !comparable(&n1, &n2) {
        let err = EvaluationError::FamilyMismatch {
            first: n1.family(),
            second: n2.family(),
        };
        log::warn!("{err}");
        return Err(err);
    }

    Ok(classify(&n1, &n2))
}
