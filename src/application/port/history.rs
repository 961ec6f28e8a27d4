// SPDX-License-Identifier: MPL-2.0
//! Extraction history port definition.

use crate::domain::history::HistoryEntry;

/// Port for listing previously processed documents.
pub trait HistorySource {
    /// Entries ordered from most to least recent.
    fn entries(&self) -> Vec<HistoryEntry>;

    /// The `count` most recent entries.
    fn recent(&self, count: usize) -> Vec<HistoryEntry> {
        self.entries().into_iter().take(count).collect()
    }
}
