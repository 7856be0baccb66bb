//! bd-core: stable foundation for battdesign.
//!
//! Contains:
//! - units (uom SI types + constructors for electrical quantities)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BdError, BdResult};
pub use numeric::*;
pub use units::*;
