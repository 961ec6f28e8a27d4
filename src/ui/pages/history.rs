// SPDX-License-Identifier: MPL-2.0
//! Extraction history table with a name filter.

use crate::app::Message;
use crate::domain::history::{ExtractionStatus, HistoryEntry};
use crate::i18n::TranslationStore;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::pages::empty_state;
use crate::ui::{muted, styles};
use iced::alignment::Vertical;
use iced::widget::{container, rule, text, text_input, Column, Row};
use iced::{Element, Length};

/// Relative column widths: name, type, date, pages, status.
const COLUMN_PORTIONS: [u16; 5] = [4, 2, 2, 1, 2];

/// Entries whose name matches `query`, in source order.
#[must_use]
pub fn filter<'e>(entries: &'e [HistoryEntry], query: &str) -> Vec<&'e HistoryEntry> {
    entries.iter().filter(|entry| entry.matches(query)).collect()
}

/// Colored label for an extraction status.
pub fn status_pill<'a>(i18n: &TranslationStore, status: ExtractionStatus) -> Element<'a, Message> {
    let color = match status {
        ExtractionStatus::Completed => palette::SUCCESS_500,
        ExtractionStatus::ReviewNeeded => palette::WARNING_500,
    };

    container(text(i18n.translate(status.label_key())).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::status_pill(color))
        .into()
}

pub fn view<'a>(i18n: &TranslationStore, entries: &[HistoryEntry], query: &'a str) -> Element<'a, Message> {
    let search = text_input(&i18n.translate("history.search_placeholder"), query)
        .on_input(Message::HistorySearch)
        .padding(spacing::XS)
        .width(Length::Fixed(320.0));

    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(text(i18n.translate("nav.history")).size(typography::TITLE_LG))
        .push(search);

    if entries.is_empty() {
        return content.push(empty_state(i18n)).into();
    }

    let header_keys = [
        "history.col_name",
        "history.col_type",
        "history.col_date",
        "history.col_pages",
        "history.col_status",
    ];
    let header = header_keys
        .iter()
        .zip(COLUMN_PORTIONS)
        .fold(Row::new().spacing(spacing::SM), |row, (key, portion)| {
            row.push(
                muted(i18n.translate(key), typography::CAPTION).width(Length::FillPortion(portion)),
            )
        });

    let rows = filter(entries, query)
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |column, entry| {
            column.push(rule::horizontal(1)).push(row(i18n, entry))
        });

    content = content.push(
        container(Column::new().spacing(spacing::XS).push(header).push(rows))
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::card),
    );

    content.into()
}

fn row<'a>(i18n: &TranslationStore, entry: &HistoryEntry) -> Element<'a, Message> {
    let [name, kind, date, pages, status] = COLUMN_PORTIONS;

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            text(entry.name.clone())
                .size(typography::BODY)
                .width(Length::FillPortion(name)),
        )
        .push(
            text(i18n.translate(entry.document_type.label_key()))
                .size(typography::BODY)
                .width(Length::FillPortion(kind)),
        )
        .push(muted(entry.processed_at.clone(), typography::BODY).width(Length::FillPortion(date)))
        .push(
            text(entry.pages.to_string())
                .size(typography::BODY)
                .width(Length::FillPortion(pages)),
        )
        .push(
            container(status_pill(i18n, entry.status)).width(Length::FillPortion(status)),
        )
        .into()
}
