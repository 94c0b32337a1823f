use crate::entry::HistoryEntry;
use core_types::CalcError;
use std::collections::VecDeque;

/// Maximum number of entries a `HistoryLog` retains.
pub const MAX_HISTORY_SIZE: usize = 100;

/// A bounded log of calculations, oldest first.
///
/// Owned by a single session. Concurrent use needs external locking around
/// `add_entry`, `clear` and `entry_at`.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_HISTORY_SIZE),
        }
    }

    /// Records `label = result` with the current timestamp.
    ///
    /// A blank label is rejected before the log is touched. When the log is full the
    /// oldest entry is evicted first.
    pub fn add_entry(&mut self, label: impl Into<String>, result: f64) -> Result<(), CalcError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(CalcError::InvalidInput(
                "Operation label cannot be empty".to_string(),
            ));
        }

        if self.entries.len() == MAX_HISTORY_SIZE {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(label = evicted.label(), "Evicted oldest history entry");
            }
        }
        self.entries.push_back(HistoryEntry::new(label, result));
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, where 0 is the oldest.
    pub fn entry_at(&self, index: usize) -> Result<&HistoryEntry, CalcError> {
        self.entries.get(index).ok_or_else(|| {
            CalcError::InvalidInput(format!(
                "Invalid history index: {index} (size {})",
                self.entries.len()
            ))
        })
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The last `n` entries (or fewer), still oldest first.
    pub fn recent(
        &self,
        n: usize,
    ) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.range(skip..)
    }
}
