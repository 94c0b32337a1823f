//! # Abacus Calculation Engine
//!
//! Validated arithmetic and scientific functions over `f64`.
//!
//! ## Architectural Principles
//!
//! - **Stateless Calculation:** `Engine` holds no state. Every function either returns
//!   a finite, defined real number or a `CalcError` naming why it could not.
//! - **Validate First:** NaN and infinite operands are rejected before any
//!   operation-specific domain check runs.
//!
//! ## Public API
//!
//! - `Engine`: the arithmetic and scientific functions, plus `evaluate` to dispatch an
//!   `Operation` over a slice of operands.

pub mod calculator;
mod util;

pub use calculator::Engine;
pub use core_types::{CalcError, Operation, EPSILON};
