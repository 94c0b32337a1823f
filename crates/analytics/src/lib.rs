//! # Abacus Analytics
//!
//! Descriptive statistics over a fixed, user-supplied sample.
//!
//! ## Architectural Principles
//!
//! - **Validated Once:** A `StatisticalAnalyzer` can only be built from a non-empty
//!   sample of finite values, so every accessor is infallible.
//! - **Immutable:** The analyzer owns a private copy of the sample. Accessors that
//!   need ordering sort a scratch copy, so repeated calls always agree.
//!
//! ## Public API
//!
//! - `StatisticalAnalyzer`: the sample wrapper and its statistics.
//! - `StatisticsReport`: a serializable snapshot of every statistic.

// Declare the modules that constitute this crate.
pub mod analyzer;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use analyzer::StatisticalAnalyzer;
pub use core_types::CalcError;
pub use report::StatisticsReport;
