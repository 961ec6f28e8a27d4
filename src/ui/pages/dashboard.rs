// SPDX-License-Identifier: MPL-2.0
//! Dashboard: welcome, usage, template shortcuts and recent documents.

use super::history::status_pill;
use crate::app::Message;
use crate::domain::document::DocumentType;
use crate::domain::history::HistoryEntry;
use crate::domain::session::Profile;
use crate::i18n::{FluentArgs, TranslationStore};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::layout::meter;
use crate::ui::pages::empty_state;
use crate::ui::{muted, styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

/// How many history rows the dashboard shows.
pub const RECENT_COUNT: usize = 3;

pub fn view<'a>(
    i18n: &TranslationStore,
    profile: &Profile,
    recent: &[HistoryEntry],
) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(text(i18n.translate("dash.welcome")).size(typography::TITLE_LG))
                .push(muted(i18n.translate("dash.subtitle"), typography::BODY_LG)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(format!("+ {}", i18n.translate("dash.quick_start"))).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Navigate(DocumentType::General.extraction_path()))
                .style(styles::button::primary),
        );

    Column::new()
        .spacing(spacing::XL)
        .push(header)
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(general_tile(i18n))
                .push(usage_card(i18n, profile)),
        )
        .push(templates(i18n))
        .push(recent_documents(i18n, recent))
        .into()
}

fn general_tile<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.translate("nav.general")).size(typography::TITLE_MD))
        .push(muted(i18n.translate("dash.general_desc"), typography::BODY))
        .push(
            text(i18n.translate("dash.general_cta"))
                .size(typography::BODY)
                .color(palette::PRIMARY_500),
        );

    button(content)
        .width(Length::FillPortion(2))
        .padding(spacing::LG)
        .on_press(Message::Navigate(DocumentType::General.extraction_path()))
        .style(styles::button::tile)
        .into()
}

fn usage_card<'a>(i18n: &TranslationStore, profile: &Profile) -> Element<'a, Message> {
    let mut count = FluentArgs::new();
    count.set("usage", profile.usage);
    count.set("limit", profile.limit);
    let mut limit = FluentArgs::new();
    limit.set("limit", profile.limit);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(muted(i18n.translate("common.usage"), typography::CAPTION))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(text(i18n.translate_with("common.usage_count", &count)).size(typography::TITLE_MD))
                .push(muted(i18n.translate("common.pages_processed"), typography::BODY)),
        )
        .push(meter(profile.usage_ratio()))
        .push(muted(i18n.translate_with("common.limit", &limit), typography::CAPTION))
        .push(
            button(text(i18n.translate("common.upgrade")).size(typography::BODY))
                .on_press(Message::Navigate("/#pricing".to_string()))
                .style(styles::button::tile),
        );

    container(content)
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn templates<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let tiles = DocumentType::ALL
        .into_iter()
        .filter(|kind| *kind != DocumentType::General)
        .fold(Row::new().spacing(spacing::MD), |row, kind| {
            row.push(
                button(text(i18n.translate(kind.label_key())).size(typography::BODY))
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .on_press(Message::Navigate(kind.extraction_path()))
                    .style(styles::button::tile),
            )
        });

    Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.translate("nav.templates")).size(typography::TITLE_SM))
        .push(tiles)
        .into()
}

fn recent_documents<'a>(i18n: &TranslationStore, recent: &[HistoryEntry]) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(text(i18n.translate("dash.recent")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.translate("dash.view_all")).size(typography::BODY))
                .on_press(Message::Navigate("/history".to_string()))
                .style(styles::button::ghost),
        );

    let body: Element<'a, Message> = if recent.is_empty() {
        empty_state(i18n)
    } else {
        recent
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, entry| {
                column.push(
                    container(
                        Row::new()
                            .spacing(spacing::MD)
                            .align_y(Vertical::Center)
                            .push(
                                Column::new()
                                    .push(text(entry.name.clone()).size(typography::BODY))
                                    .push(muted(entry.processed_at.clone(), typography::CAPTION)),
                            )
                            .push(Space::new().width(Length::Fill))
                            .push(status_pill(i18n, entry.status)),
                    )
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::container::card),
                )
            })
            .into()
    };

    Column::new().spacing(spacing::SM).push(header).push(body).into()
}
