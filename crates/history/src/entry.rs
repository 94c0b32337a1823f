use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// One recorded calculation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    label: String,
    result: f64,
    created_at: DateTime<Local>,
}

impl HistoryEntry {
    pub(crate) fn new(label: String, result: f64) -> Self {
        Self {
            label,
            result,
            created_at: Local::now(),
        }
    }

    /// The description of the calculation, e.g. `"2 + 3"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<30} = {:<15.6} [{}]",
            self.label,
            self.result,
            self.created_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
