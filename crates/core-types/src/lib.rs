//! # Abacus Core Types
//!
//! The shared vocabulary of the workspace: the error taxonomy every calculation
//! returns, the near-zero threshold, and the catalogue of supported operations.
//! This crate is a leaf; it depends on nothing else in the workspace.

pub mod enums;
pub mod error;

/// Magnitude below which a value is treated as zero (divisors, integrality checks,
/// tangent asymptotes).
pub const EPSILON: f64 = 1e-10;

// Re-export the core types to provide a clean public API.
pub use enums::Operation;
pub use error::CalcError;
