// SPDX-License-Identifier: MPL-2.0
//! Records of documents that went through extraction.

use super::document::DocumentType;

/// Outcome of an extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStatus {
    Completed,
    ReviewNeeded,
}

impl ExtractionStatus {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ExtractionStatus::Completed => "status.completed",
            ExtractionStatus::ReviewNeeded => "status.review_needed",
        }
    }
}

/// One processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u32,
    pub name: String,
    pub document_type: DocumentType,
    /// Local timestamp, `YYYY-MM-DD HH:MM`.
    pub processed_at: String,
    pub pages: u32,
    pub status: ExtractionStatus,
}

impl HistoryEntry {
    /// Case-insensitive substring match on the document name. An empty query
    /// matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
