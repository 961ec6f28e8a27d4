// SPDX-License-Identifier: MPL-2.0
//! Message handlers and the post-update bookkeeping of the application.

use super::{App, ExtractionState, Message, StoreEvent};
use crate::domain::document::{DocumentInfo, SUPPORTED_EXTENSIONS};
use crate::routing::{self, Guarded, View, DASHBOARD_ROUTE};
use iced::Task;
use std::path::Path;

/// Opens the native file picker; the result comes back as
/// [`Message::FileDialogResult`].
pub fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Documents", SUPPORTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileDialogResult,
    )
}

impl App {
    /// Moves to `path`. Leaving an extraction view forgets its document.
    pub(super) fn navigate(&mut self, path: String) {
        let target = routing::resolve(&path);
        let current = routing::resolve(&self.location);
        if target.path != current.path {
            self.extraction = ExtractionState::default();
        }

        tracing::debug!(from = %self.location, to = %path, "navigate");
        self.location = path;
        self.language_menu_open = false;
        self.notice = None;
    }

    pub(super) fn handle_login(&mut self) {
        // The store already logged the rejection.
        if self.session.login().is_err() {
            self.notice = Some("auth.failed");
        }
    }

    /// Accepts a dropped or picked file only while the extraction view is
    /// shown. A picker can resolve after the user has navigated away or
    /// signed out.
    pub(super) fn accept_document(&mut self, path: &Path) {
        if routing::resolve(&self.location).view == View::Extraction {
            self.load_document(path);
        } else {
            tracing::debug!(path = %path.display(), "ignoring document outside the extraction view");
        }
    }

    pub(super) fn load_document(&mut self, path: &Path) {
        match DocumentInfo::from_path(path) {
            Ok(document) => {
                tracing::info!(
                    name = %document.name,
                    size = document.size,
                    mime = %document.mime_type,
                    "document selected"
                );
                self.extraction.document = Some(document);
                self.notice = None;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read document");
                self.extraction = ExtractionState::default();
                self.notice = Some("extract.read_error");
            }
        }
    }

    /// Reacts to store changes queued by the subscriptions.
    pub(super) fn process_store_events(&mut self) {
        let events: Vec<StoreEvent> = self.store_events.borrow_mut().drain(..).collect();

        for event in events {
            match event {
                StoreEvent::LanguageChanged(locale) => {
                    tracing::debug!(%locale, "re-rendering with new language");
                    self.language_menu_open = false;
                }
                StoreEvent::SessionChanged {
                    authenticated: true,
                } => self.navigate(DASHBOARD_ROUTE.to_string()),
                StoreEvent::SessionChanged {
                    authenticated: false,
                } => {
                    self.extraction = ExtractionState::default();
                    self.history_query.clear();
                }
            }
        }
    }

    /// Replaces the location with the guard's redirect target when the
    /// current route may not be shown.
    pub(super) fn enforce_guard(&mut self) {
        let route = routing::resolve(&self.location);
        if let Guarded::Redirect(redirect) = routing::guard(route.protected, &self.session, || ()) {
            tracing::debug!(from = %self.location, to = redirect.to, "redirecting");
            self.location = redirect.to.to_string();
        }
    }
}
