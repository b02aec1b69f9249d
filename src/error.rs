//! Error types for prefix parsing and overlap evaluation.

use crate::models::Family;
use std::fmt;
use thiserror::Error;

/// Broad error category, independent of which operand failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed CIDR string.
    InvalidSyntax,
    /// Both prefixes parsed but belong to different address families.
    FamilyMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidSyntax => write!(f, "invalid-syntax"),
            ErrorKind::FamilyMismatch => write!(f, "family-mismatch"),
        }
    }
}

/// Which argument of [`crate::evaluate`] an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// Errors raised while turning a CIDR string into a [`crate::NormalizedPrefix`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not of the form `<address>/<prefix-length>`.
    #[error("invalid CIDR address: {0} (expected <address>/<prefix-length>)")]
    Syntax(String),

    /// The address part is not a valid IPv4 or IPv6 address.
    #[error("invalid {family} address: {address}")]
    Address { address: String, family: Family },

    /// The prefix length does not fit the detected address family.
    #[error("invalid prefix length /{length} for {family} (expected 0-{max})")]
    PrefixLength {
        length: String,
        family: Family,
        max: u8,
    },
}

impl ParseError {
    /// Every parse failure is a syntax error from the caller's point of view.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidSyntax
    }
}

/// Errors returned by [`crate::evaluate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("failed to parse first network prefix: {0}")]
    InvalidFirst(#[source] ParseError),

    #[error("failed to parse second network prefix: {0}")]
    InvalidSecond(#[source] ParseError),

    #[error("failed to evaluate: prefixes are not from same type (first is {first}, second is {second})")]
    FamilyMismatch { first: Family, second: Family },
}

impl EvaluationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvaluationError::InvalidFirst(e) | EvaluationError::InvalidSecond(e) => e.kind(),
            EvaluationError::FamilyMismatch { .. } => ErrorKind::FamilyMismatch,
        }
    }

    /// The operand that caused the failure, if a single one did.
    pub fn operand(&self) -> Option<Operand> {
        match self {
            EvaluationError::InvalidFirst(_) => Some(Operand::First),
            EvaluationError::InvalidSecond(_) => Some(Operand::Second),
            EvaluationError::FamilyMismatch { .. } => None,
        }
    }
}
