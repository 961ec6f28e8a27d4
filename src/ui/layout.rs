// SPDX-License-Identifier: MPL-2.0
//! Page chrome: the public header/footer and the signed-in sidebar layout.
//!
//! The layout follows the session, not the route: a signed-in user sees the
//! sidebar everywhere, including the landing and not-found pages.

use crate::app::Message;
use crate::domain::session::Profile;
use crate::i18n::{FluentArgs, TranslationStore};
use crate::routing::DASHBOARD_ROUTE;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::{language_switcher, muted, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Sidebar entries of the signed-in layout: target location and label key.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    (DASHBOARD_ROUTE, "nav.dashboard"),
    ("/extraction/general", "nav.general"),
    ("/templates", "nav.templates"),
    ("/history", "nav.history"),
    ("/settings", "nav.settings"),
];

/// Links of the public header: target location and label key.
const PUBLIC_LINKS: [(&str, &str); 3] = [
    ("/", "nav.home"),
    ("/#pricing", "nav.pricing"),
    ("/#about", "nav.about"),
];

/// Shared state every layout needs.
pub struct LayoutContext<'a> {
    pub i18n: &'a TranslationStore,
    /// Current location, already normalized by the router.
    pub location: &'a str,
    pub language_menu_open: bool,
    /// Translation key of a pending error banner.
    pub notice: Option<&'static str>,
}

/// Whether the sidebar entry for `href` is the current section.
///
/// The dashboard only matches itself; other entries also match their
/// sub-paths (`/extraction/general` stays active on `/extraction/general/…`).
#[must_use]
pub fn is_active(href: &str, location: &str) -> bool {
    location == href || (href != DASHBOARD_ROUTE && location.starts_with(href))
}

/// Top bar title: the label of the sidebar entry for the exact location,
/// else the application name.
#[must_use]
pub fn page_title(i18n: &TranslationStore, location: &str) -> String {
    NAV_ITEMS
        .iter()
        .find(|(href, _)| *href == location)
        .map_or_else(|| i18n.translate("app.name"), |(_, key)| i18n.translate(key))
}

/// Public layout: header with navigation and sign-in, scrolling body, footer.
pub fn public<'a>(ctx: &LayoutContext<'_>, content: Element<'a, Message>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let links = PUBLIC_LINKS.iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, (href, key)| {
            row.push(
                button(text(i18n.translate(key)).size(typography::BODY))
                    .on_press(Message::Navigate((*href).to_string()))
                    .style(styles::button::ghost),
            )
        },
    );

    let header_row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(brand(i18n))
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(language_switcher::toggle(i18n))
        .push(
            button(text(i18n.translate("nav.signin")).size(typography::BODY))
                .on_press(Message::Login)
                .style(styles::button::ghost),
        )
        .push(
            button(text(i18n.translate("hero.cta")).size(typography::BODY))
                .on_press(Message::Login)
                .style(styles::button::primary),
        );

    let header = container(header_row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::header);

    let footer = container(muted(i18n.translate("footer.rights"), typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(styles::container::section);

    let body = Column::new().width(Length::Fill).push(content).push(footer);

    overlays(ctx, Column::new().push(header))
        .push(scrollable(body).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Signed-in layout: sidebar with navigation, usage and account; top bar
/// with the page title and language switcher.
pub fn authenticated<'a>(
    ctx: &LayoutContext<'_>,
    profile: &Profile,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let top_bar = container(
        Row::new()
            .align_y(Vertical::Center)
            .push(text(page_title(i18n, ctx.location)).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(language_switcher::toggle(i18n)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HEADER_HEIGHT))
    .padding([spacing::SM, spacing::LG])
    .align_y(Vertical::Center)
    .style(styles::container::header);

    let main = overlays(ctx, Column::new().push(top_bar))
        .push(
            scrollable(container(content).width(Length::Fill).padding(spacing::LG))
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    Row::new()
        .push(sidebar(ctx, profile))
        .push(main)
        .height(Length::Fill)
        .into()
}

/// Appends the open language menu and the notice banner below a header.
fn overlays<'a>(ctx: &LayoutContext<'_>, column: Column<'a, Message>) -> Column<'a, Message> {
    let mut column = column;

    if ctx.language_menu_open {
        column = column.push(
            container(language_switcher::menu(ctx.i18n))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::LG])
                .align_x(Horizontal::Right),
        );
    }

    if let Some(key) = ctx.notice {
        let banner = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(text(ctx.i18n.translate(key)).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(
                button(text("×").size(typography::BODY))
                    .on_press(Message::DismissNotice)
                    .style(styles::button::ghost),
            );
        column = column.push(
            container(
                container(banner)
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::notice),
            )
            .padding([spacing::XS, spacing::LG]),
        );
    }

    column
}

fn brand<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let mark = container(text("D").size(typography::TITLE_SM))
        .center(Length::Fixed(sizing::AVATAR))
        .style(styles::container::badge(palette::PRIMARY_500, radius::SM));

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(mark)
        .push(text(i18n.translate("app.name")).size(typography::TITLE_MD))
        .into()
}

fn sidebar<'a>(ctx: &LayoutContext<'_>, profile: &Profile) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let nav = NAV_ITEMS.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, (href, key)| {
            column.push(
                button(text(i18n.translate(key)).size(typography::BODY))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .on_press(Message::Navigate((*href).to_string()))
                    .style(styles::button::nav_item(is_active(href, ctx.location))),
            )
        },
    );

    let account = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            container(text(profile.initial().map(String::from).unwrap_or_default()).size(typography::BODY))
                .center(Length::Fixed(sizing::AVATAR))
                .style(styles::container::badge(palette::PRIMARY_500, radius::FULL)),
        )
        .push(
            Column::new()
                .push(text(profile.name.clone()).size(typography::BODY))
                .push(muted(i18n.translate("common.plan_pro"), typography::CAPTION)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.translate("nav.logout")).size(typography::CAPTION))
                .on_press(Message::Logout)
                .style(styles::button::nav_item(false)),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .height(Length::Fill)
        .push(brand(i18n))
        .push(nav)
        .push(Space::new().height(Length::Fill))
        .push(usage_panel(i18n, profile))
        .push(account);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::sidebar)
        .into()
}

/// `usage / limit` with a meter and a warning once past the threshold.
pub fn usage_panel<'a>(i18n: &TranslationStore, profile: &Profile) -> Element<'a, Message> {
    let mut args = FluentArgs::new();
    args.set("usage", profile.usage);
    args.set("limit", profile.limit);

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .push(text(i18n.translate("common.usage")).size(typography::CAPTION))
                .push(Space::new().width(Length::Fill))
                .push(text(i18n.translate_with("common.usage_count", &args)).size(typography::CAPTION)),
        )
        .push(meter(profile.usage_ratio()));

    if profile.is_near_limit() {
        column = column.push(
            text(i18n.translate("common.limit_approaching"))
                .size(typography::CAPTION)
                .color(palette::WARNING_500),
        );
    }

    container(column)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::sidebar_panel)
        .into()
}

/// Thin horizontal bar filled to `ratio` (clamped to 0..=1).
pub fn meter<'a>(ratio: f32) -> Element<'a, Message> {
    // Portions are integers; a thousandth is finer than the bar can show.
    let filled = (ratio.clamp(0.0, 1.0) * 1000.0).round() as u16;
    let bar = |portion: u16, color| {
        container(Space::new())
            .width(Length::FillPortion(portion))
            .height(Length::Fixed(6.0))
            .style(styles::container::badge(color, radius::FULL))
    };

    let mut row = Row::new().width(Length::Fill);
    if filled > 0 {
        row = row.push(bar(filled, palette::PRIMARY_400));
    }
    if filled < 1000 {
        row = row.push(bar(1000 - filled, palette::GRAY_700));
    }
    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::Locale;
    use crate::infrastructure::demo::demo_profile;

    #[test]
    fn dashboard_entry_matches_only_itself() {
        assert!(is_active("/dashboard", "/dashboard"));
        assert!(!is_active("/dashboard", "/dashboard/extra"));
    }

    #[test]
    fn other_entries_match_sub_paths() {
        assert!(is_active("/extraction/general", "/extraction/general"));
        assert!(is_active("/history", "/history/42"));
        assert!(!is_active("/extraction/general", "/extraction/invoice"));
        assert!(!is_active("/templates", "/dashboard"));
    }

    #[test]
    fn page_title_uses_exact_nav_entry() {
        let i18n = TranslationStore::new(Locale::En).expect("embedded catalogs");
        assert_eq!(page_title(&i18n, "/history"), "Your Documents");
        assert_eq!(page_title(&i18n, "/extraction/invoice"), "DocExtract");
    }

    #[test]
    fn layouts_render() {
        let i18n = TranslationStore::new(Locale::Th).expect("embedded catalogs");
        let ctx = LayoutContext {
            i18n: &i18n,
            location: "/dashboard",
            language_menu_open: true,
            notice: Some("auth.failed"),
        };
        let _public = public(&ctx, text("body").into());
        let _signed_in = authenticated(&ctx, &demo_profile(), text("body").into());
    }
}
