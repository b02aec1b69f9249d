//! Domain models for prefix overlap evaluation.
//!
//! - [`NormalizedPrefix`] - IPv4/IPv6 network in CIDR notation, host bits cleared
//! - [`Family`] - address family tag fixed at parse time
//! - [`OverlapStatus`] - result of comparing two prefixes

mod prefix;
mod status;

// Re-export public types
pub use prefix::{
    cut_addr, get_cidr_mask, parse, Family, NormalizedPrefix, MAX_LENGTH_V4, MAX_LENGTH_V6,
};
pub use status::OverlapStatus;
