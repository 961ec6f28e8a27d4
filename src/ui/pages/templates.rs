// SPDX-License-Identifier: MPL-2.0
//! Document type catalogue. Picking a type opens its extraction view.

use crate::app::Message;
use crate::domain::document::DocumentType;
use crate::i18n::TranslationStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{muted, styles};
use iced::widget::{button, text, Column, Row};
use iced::{Element, Length};

/// Tiles per row.
const COLUMNS: usize = 3;

pub fn view<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let rows = DocumentType::ALL
        .chunks(COLUMNS)
        .fold(Column::new().spacing(spacing::MD), |column, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(spacing::MD), |row, kind| {
                row.push(tile(i18n, *kind))
            });
            column.push(row)
        });

    Column::new()
        .spacing(spacing::LG)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(text(i18n.translate("nav.templates")).size(typography::TITLE_LG))
                .push(muted(i18n.translate("templates.subtitle"), typography::BODY_LG)),
        )
        .push(rows)
        .into()
}

fn tile<'a>(i18n: &TranslationStore, kind: DocumentType) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.translate(kind.label_key())).size(typography::TITLE_SM))
        .push(muted(i18n.translate(kind.description_key()), typography::BODY));

    button(content)
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .on_press(Message::Navigate(kind.extraction_path()))
        .style(styles::button::tile)
        .into()
}
