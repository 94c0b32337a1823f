//! # Abacus History
//!
//! A bounded, insertion-ordered log of past calculations.
//!
//! The log keeps at most [`MAX_HISTORY_SIZE`] entries. Appending to a full log evicts
//! the oldest entry first, regardless of how entries were read in the meantime.

pub mod entry;
pub mod log;

pub use core_types::CalcError;
pub use entry::HistoryEntry;
pub use log::{HistoryLog, MAX_HISTORY_SIZE};
