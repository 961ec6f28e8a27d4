// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every render resolves the location, runs the route guard and wraps the
//! page in the layout that matches the session.

use super::Message;
use crate::application::port::HistorySource;
use crate::domain::document::DocumentInfo;
use crate::i18n::TranslationStore;
use crate::routing::{self, Guarded, RouteParams, View};
use crate::session::SessionStore;
use crate::ui::layout::{self, LayoutContext};
use crate::ui::pages::{dashboard, extraction, history, home, not_found, templates};
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a TranslationStore,
    pub session: &'a SessionStore,
    pub history: &'a dyn HistorySource,
    pub location: &'a str,
    pub document: Option<&'a DocumentInfo>,
    pub history_query: &'a str,
    pub language_menu_open: bool,
    pub notice: Option<&'static str>,
}

/// Renders the page for the current location inside its layout.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let route = routing::resolve(ctx.location);

    let page = match routing::guard_route(&route, ctx.session, |view, params| {
        render_page(&ctx, view, params, route.fragment.as_deref(), &route.path)
    }) {
        Guarded::Render(page) => page,
        // The update loop replaces the location right after; until then the
        // landing page stands in.
        Guarded::Redirect(_) => home::view(ctx.i18n, home::Section::Hero, false),
    };

    let layout_ctx = LayoutContext {
        i18n: ctx.i18n,
        location: &route.path,
        language_menu_open: ctx.language_menu_open,
        notice: ctx.notice,
    };

    match ctx.session.user() {
        Some(profile) => layout::authenticated(&layout_ctx, profile, page),
        None => layout::public(&layout_ctx, page),
    }
}

fn render_page<'a>(
    ctx: &ViewContext<'a>,
    view: View,
    params: &RouteParams,
    fragment: Option<&str>,
    path: &str,
) -> Element<'a, Message> {
    match view {
        View::Home => home::view(
            ctx.i18n,
            home::Section::from_fragment(fragment),
            ctx.session.is_authenticated(),
        ),
        View::Dashboard => match ctx.session.user() {
            Some(profile) => dashboard::view(
                ctx.i18n,
                profile,
                &ctx.history.recent(dashboard::RECENT_COUNT),
            ),
            None => home::view(ctx.i18n, home::Section::Hero, false),
        },
        View::Extraction => extraction::view(
            ctx.i18n,
            extraction::requested_type(params.get("type")),
            ctx.document,
        ),
        View::History => history::view(ctx.i18n, &ctx.history.entries(), ctx.history_query),
        View::Templates => templates::view(ctx.i18n),
        View::NotFound => not_found::view(ctx.i18n, path),
    }
}
