// SPDX-License-Identifier: MPL-2.0
//! Application root for the DocExtract shell.
//!
//! The `App` struct owns the translation and session stores, routes messages
//! and renders the view for the current location. Store changes are observed
//! through their subscriptions and handled once the message that caused them
//! has been processed; after that the route guard runs again, so signing out
//! on a protected page lands on `/`.

pub mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::HistorySource;
use crate::config::{self, Config, DEFAULT_START_ROUTE};
use crate::domain::document::DocumentInfo;
use crate::domain::locale::Locale;
use crate::error::Result;
use crate::i18n::{self, TranslationStore};
use crate::infrastructure::demo::{DemoAuthenticator, DemoHistory};
use crate::routing::{self, View};
use crate::session::SessionStore;
use crate::store::Unsubscribe;
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A store change, queued by a subscription and handled after the update
/// that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreEvent {
    LanguageChanged(Locale),
    SessionChanged { authenticated: bool },
}

/// Document collected on the extraction view.
#[derive(Debug, Default)]
struct ExtractionState {
    document: Option<DocumentInfo>,
}

/// Root Iced application.
pub struct App {
    i18n: TranslationStore,
    session: SessionStore,
    history: Box<dyn HistorySource>,
    /// Current location, e.g. `/extraction/invoice` or `/#pricing`.
    location: String,
    extraction: ExtractionState,
    history_query: String,
    language_menu_open: bool,
    /// Translation key of the error banner, if any.
    notice: Option<&'static str>,
    window_size: (f32, f32),
    store_events: Rc<RefCell<Vec<StoreEvent>>>,
    _store_subscriptions: Vec<Unsubscribe>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("location", &self.location)
            .field("language", &self.i18n.language())
            .field("session", self.session.session())
            .field("extraction", &self.extraction)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings from the configured size.
fn window_settings(size: (f32, f32)) -> window::Settings {
    window::Settings {
        size: iced::Size::new(size.0, size.1),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    let window = window_settings(app.window_size);

    // Wrap the app in RefCell<Option<_>> to satisfy the Fn requirement on
    // boot while only moving it out once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, resolves the startup locale and builds the
    /// stores with the demo adapters.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded translation catalogs cannot be loaded.
    pub fn boot(flags: Flags) -> Result<Self> {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let os_locale = sys_locale::get_locale();
        let language = i18n::resolve_locale(flags.lang.as_deref(), &config, os_locale.as_deref())
            .unwrap_or_default();
        tracing::info!(%language, "starting");

        let location = flags
            .route
            .or_else(|| config.general.start_route.clone())
            .unwrap_or_else(|| DEFAULT_START_ROUTE.to_string());

        let mut app = Self::with_stores(
            TranslationStore::new(language)?,
            SessionStore::new(Box::new(DemoAuthenticator)),
            Box::new(DemoHistory),
            location,
        );
        app.window_size = config.window_size();
        Ok(app)
    }

    /// Assembles the application around existing stores and subscribes to
    /// both of them. The initial location is guarded right away.
    pub fn with_stores(
        i18n: TranslationStore,
        session: SessionStore,
        history: Box<dyn HistorySource>,
        location: String,
    ) -> Self {
        let store_events = Rc::new(RefCell::new(Vec::new()));

        let language_events = Rc::clone(&store_events);
        let session_events = Rc::clone(&store_events);
        let subscriptions = vec![
            i18n.subscribe(move |locale| {
                language_events
                    .borrow_mut()
                    .push(StoreEvent::LanguageChanged(*locale));
            }),
            session.subscribe(move |session| {
                session_events.borrow_mut().push(StoreEvent::SessionChanged {
                    authenticated: session.is_authenticated(),
                });
            }),
        ];

        let mut app = Self {
            i18n,
            session,
            history,
            location,
            extraction: ExtractionState::default(),
            history_query: String::new(),
            language_menu_open: false,
            notice: None,
            window_size: Config::default().window_size(),
            store_events,
            _store_subscriptions: subscriptions,
        };
        app.enforce_guard();
        app
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn translations(&self) -> &TranslationStore {
        &self.i18n
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn title(&self) -> String {
        let route = routing::resolve(&self.location);
        let page_key = match route.view {
            View::Home => "nav.home",
            View::Dashboard => "nav.dashboard",
            View::Extraction => {
                crate::ui::pages::extraction::requested_type(route.params.get("type")).label_key()
            }
            View::History => "nav.history",
            View::Templates => "nav.templates",
            View::NotFound => "notfound.title",
        };
        format!(
            "{} - {}",
            self.i18n.translate(page_key),
            self.i18n.translate("app.name")
        )
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(routing::resolve(&self.location).view)
    }

    /// Handles one message, then the store events it caused, then re-runs
    /// the route guard.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Navigate(path) => {
                self.navigate(path);
                Task::none()
            }
            Message::SetLanguage(locale) => {
                self.i18n.set_language(locale);
                Task::none()
            }
            Message::ToggleLanguageMenu => {
                self.language_menu_open = !self.language_menu_open;
                Task::none()
            }
            Message::Login => {
                self.handle_login();
                Task::none()
            }
            Message::Logout => {
                self.session.logout();
                Task::none()
            }
            Message::OpenFileDialog => update::open_file_dialog(),
            Message::FileDialogResult(path) => {
                if let Some(path) = path {
                    self.accept_document(&path);
                }
                Task::none()
            }
            Message::FileDropped(path) => {
                self.accept_document(&path);
                Task::none()
            }
            Message::ClearDocument => {
                self.extraction = ExtractionState::default();
                Task::none()
            }
            Message::HistorySearch(query) => {
                self.history_query = query;
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        };

        self.process_store_events();
        self.enforce_guard();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            history: self.history.as_ref(),
            location: &self.location,
            document: self.extraction.document.as_ref(),
            history_query: &self.history_query,
            language_menu_open: self.language_menu_open,
            notice: self.notice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{AuthError, Authenticator};
    use crate::domain::session::Profile;
    use std::io::Write;

    fn app_at(location: &str) -> App {
        App::with_stores(
            TranslationStore::new(Locale::En).expect("embedded catalogs"),
            SessionStore::new(Box::new(DemoAuthenticator)),
            Box::new(DemoHistory),
            location.to_string(),
        )
    }

    fn signed_in_app_at(location: &str) -> App {
        let mut app = app_at("/");
        let _ = app.update(Message::Login);
        let _ = app.update(Message::Navigate(location.to_string()));
        app
    }

    #[test]
    fn protected_start_location_redirects_to_landing() {
        let app = app_at("/history");
        assert_eq!(app.location(), "/");
    }

    #[test]
    fn public_start_location_is_kept() {
        assert_eq!(app_at("/#pricing").location(), "/#pricing");
        assert_eq!(app_at("/missing").location(), "/missing");
    }

    #[test]
    fn login_opens_dashboard() {
        let mut app = app_at("/");
        let _ = app.update(Message::Login);
        assert!(app.session().is_authenticated());
        assert_eq!(app.location(), "/dashboard");
    }

    #[test]
    fn logout_on_protected_page_lands_on_root() {
        let mut app = signed_in_app_at("/extraction/invoice");
        assert_eq!(app.location(), "/extraction/invoice");

        let _ = app.update(Message::Logout);
        assert!(!app.session().is_authenticated());
        assert_eq!(app.location(), "/");
    }

    #[test]
    fn navigating_to_protected_page_while_signed_out_redirects() {
        let mut app = app_at("/");
        let _ = app.update(Message::Navigate("/templates".to_string()));
        assert_eq!(app.location(), "/");
    }

    #[test]
    fn language_change_closes_menu() {
        let mut app = app_at("/");
        let _ = app.update(Message::ToggleLanguageMenu);
        assert!(app.language_menu_open);

        let _ = app.update(Message::SetLanguage(Locale::Th));
        assert!(!app.language_menu_open);
        assert_eq!(app.translations().language(), Locale::Th);
        assert_eq!(app.title(), "หน้าแรก - DocExtract");
    }

    #[test]
    fn title_follows_route() {
        let app = signed_in_app_at("/extraction/invoice");
        assert_eq!(app.title(), "Invoice - DocExtract");
        assert_eq!(app_at("/nope").title(), "Page not found - DocExtract");
    }

    #[test]
    fn dropped_file_is_loaded_on_extraction_view() {
        let mut file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .expect("temp file");
        file.write_all(b"%PDF-1.7").expect("write");

        let mut app = signed_in_app_at("/extraction/general");
        let _ = app.update(Message::FileDropped(file.path().to_path_buf()));

        let document = app.extraction.document.as_ref().expect("document loaded");
        assert_eq!(document.size, 8);
        assert_eq!(document.mime_type, "application/pdf");

        let _ = app.update(Message::ClearDocument);
        assert!(app.extraction.document.is_none());
    }

    #[test]
    fn dropped_file_is_ignored_elsewhere() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let mut app = signed_in_app_at("/dashboard");
        let _ = app.update(Message::FileDropped(file.path().to_path_buf()));
        assert!(app.extraction.document.is_none());
    }

    #[test]
    fn unreadable_file_sets_notice() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = signed_in_app_at("/extraction/general");
        let _ = app.update(Message::FileDialogResult(Some(dir.path().join("gone.pdf"))));

        assert!(app.extraction.document.is_none());
        assert_eq!(app.notice, Some("extract.read_error"));
    }

    #[test]
    fn picked_file_is_ignored_after_leaving_extraction_view() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let mut app = signed_in_app_at("/extraction/general");
        let _ = app.update(Message::Navigate("/history".to_string()));
        let _ = app.update(Message::FileDialogResult(Some(file.path().to_path_buf())));

        assert!(app.extraction.document.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn picked_file_is_ignored_after_logout() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = signed_in_app_at("/extraction/general");
        let _ = app.update(Message::Logout);
        let _ = app.update(Message::FileDialogResult(Some(dir.path().join("gone.pdf"))));

        assert_eq!(app.location(), "/");
        assert!(app.extraction.document.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn logout_clears_per_user_state() {
        let mut app = signed_in_app_at("/history");
        let _ = app.update(Message::HistorySearch("invoice".to_string()));
        let _ = app.update(Message::Logout);
        assert!(app.history_query.is_empty());
    }

    struct Offline;

    impl Authenticator for Offline {
        fn authenticate(&self) -> std::result::Result<Profile, AuthError> {
            Err(AuthError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn failed_login_shows_notice_and_stays_put() {
        let mut app = App::with_stores(
            TranslationStore::new(Locale::En).expect("embedded catalogs"),
            SessionStore::new(Box::new(Offline)),
            Box::new(DemoHistory),
            "/".to_string(),
        );
        let _ = app.update(Message::Login);

        assert!(!app.session().is_authenticated());
        assert_eq!(app.location(), "/");
        assert_eq!(app.notice, Some("auth.failed"));

        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn view_renders_for_every_route() {
        let mut app = signed_in_app_at("/dashboard");
        for path in ["/", "/#pricing", "/dashboard", "/extraction/po", "/history", "/templates", "/settings", "/nope"] {
            let _ = app.update(Message::Navigate(path.to_string()));
            let _element = app.view();
        }
        let _ = app.update(Message::Logout);
        let _element = app.view();
    }
}
