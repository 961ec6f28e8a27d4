// SPDX-License-Identifier: MPL-2.0
//! Read-only card describing a picked or dropped document.

use crate::app::Message;
use crate::domain::document::{DocumentInfo, FileCategory};
use crate::i18n::TranslationStore;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::{muted, styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

/// Short glyph shown in the category badge.
fn category_mark(category: FileCategory) -> &'static str {
    match category {
        FileCategory::Pdf => "PDF",
        FileCategory::Image => "IMG",
        FileCategory::Spreadsheet => "XLS",
        FileCategory::Audio => "AUD",
        FileCategory::Document => "DOC",
        FileCategory::Other => "FILE",
    }
}

/// Renders name, category, formatted size and MIME type, plus a button to
/// remove the document.
pub fn view<'a>(i18n: &TranslationStore, document: &DocumentInfo) -> Element<'a, Message> {
    let category = document.category();

    let badge = container(text(category_mark(category)).size(typography::CAPTION))
        .center(Length::Fixed(sizing::AVATAR * 1.5))
        .style(styles::container::badge(palette::PRIMARY_500, radius::MD));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(badge)
        .push(
            Column::new()
                .push(text(document.name.clone()).size(typography::BODY_LG))
                .push(muted(i18n.translate(category.label_key()), typography::CAPTION)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.translate("extract.clear")).size(typography::BODY))
                .on_press(Message::ClearDocument)
                .style(styles::button::ghost),
        );

    let detail = |label_key: &str, value: String| {
        Row::new()
            .spacing(spacing::SM)
            .push(muted(i18n.translate(label_key), typography::BODY).width(Length::Fixed(80.0)))
            .push(text(value).size(typography::BODY))
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(muted(i18n.translate("extract.preview_title"), typography::CAPTION))
        .push(header)
        .push(detail("extract.file_size", document.formatted_size()))
        .push(detail("extract.file_type", document.mime_type.clone()));

    container(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::Locale;

    #[test]
    fn every_category_has_a_mark() {
        for category in [
            FileCategory::Pdf,
            FileCategory::Image,
            FileCategory::Spreadsheet,
            FileCategory::Audio,
            FileCategory::Document,
            FileCategory::Other,
        ] {
            assert!(!category_mark(category).is_empty());
        }
    }

    #[test]
    fn preview_renders() {
        let i18n = TranslationStore::new(Locale::En).expect("embedded catalogs");
        let document = DocumentInfo::new("/tmp/invoice.pdf", 1536);
        let _element = view(&i18n, &document);
    }
}
