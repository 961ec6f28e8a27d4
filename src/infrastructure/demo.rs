// SPDX-License-Identifier: MPL-2.0
//! Demo adapters backed by fixed data.
//!
//! There is no backend yet: signing in always yields the same profile and the
//! history is a canned list.

use crate::application::port::{AuthError, Authenticator, HistorySource};
use crate::domain::document::DocumentType;
use crate::domain::history::{ExtractionStatus, HistoryEntry};
use crate::domain::session::Profile;

pub const DEMO_NAME: &str = "Somchai Jai-dee";
pub const DEMO_EMAIL: &str = "somchai@example.com";
pub const DEMO_USAGE: u32 = 45;
pub const DEMO_LIMIT: u32 = 100;

/// The profile every demo login produces.
#[must_use]
pub fn demo_profile() -> Profile {
    Profile {
        name: DEMO_NAME.to_string(),
        email: DEMO_EMAIL.to_string(),
        avatar: None,
        usage: DEMO_USAGE,
        limit: DEMO_LIMIT,
    }
}

/// Accepts every login request without asking for credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuthenticator;

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self) -> Result<Profile, AuthError> {
        Ok(demo_profile())
    }
}

/// Canned extraction history.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoHistory;

impl HistorySource for DemoHistory {
    fn entries(&self) -> Vec<HistoryEntry> {
        let entry = |id, name: &str, document_type, processed_at: &str, pages, status| HistoryEntry {
            id,
            name: name.to_string(),
            document_type,
            processed_at: processed_at.to_string(),
            pages,
            status,
        };

        vec![
            entry(
                1,
                "Invoice_Oct2023.pdf",
                DocumentType::Invoice,
                "2023-11-27 10:30",
                1,
                ExtractionStatus::Completed,
            ),
            entry(
                2,
                "BankStmt_SCB.pdf",
                DocumentType::BankStatement,
                "2023-11-27 09:15",
                3,
                ExtractionStatus::Completed,
            ),
            entry(
                3,
                "Contract_Draft_v2.pdf",
                DocumentType::Contract,
                "2023-11-26 14:20",
                12,
                ExtractionStatus::ReviewNeeded,
            ),
            entry(
                4,
                "PO_998877.pdf",
                DocumentType::PurchaseOrder,
                "2023-11-25 11:05",
                1,
                ExtractionStatus::Completed,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_authenticator_always_succeeds_with_same_profile() {
        let first = DemoAuthenticator.authenticate().expect("demo login never fails");
        let second = DemoAuthenticator.authenticate().expect("demo login never fails");
        assert_eq!(first, second);
        assert_eq!(first.name, DEMO_NAME);
        assert_eq!(first.usage, 45);
        assert_eq!(first.limit, 100);
    }

    #[test]
    fn demo_history_recent_takes_newest_first() {
        let recent = DemoHistory.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].name, "Invoice_Oct2023.pdf");
        assert_eq!(DemoHistory.recent(10).len(), 4);
    }
}
