// SPDX-License-Identifier: MPL-2.0
//! Extraction view: upload area and the preview of the chosen document.
//!
//! Nothing is extracted here; the view only collects a document and shows
//! its metadata.

use crate::app::Message;
use crate::domain::document::{DocumentInfo, DocumentType};
use crate::i18n::TranslationStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{document_preview, muted, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column};
use iced::{Element, Length};

/// Document type requested by the `:type` route segment. Unknown ids fall
/// back to general extraction.
#[must_use]
pub fn requested_type(id: Option<&str>) -> DocumentType {
    id.and_then(DocumentType::from_id).unwrap_or(DocumentType::General)
}

pub fn view<'a>(
    i18n: &TranslationStore,
    kind: DocumentType,
    document: Option<&DocumentInfo>,
) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(text(i18n.translate(kind.label_key())).size(typography::TITLE_LG))
        .push(muted(i18n.translate(kind.description_key()), typography::BODY_LG));

    let body = match document {
        Some(document) => document_preview::view(i18n, document),
        None => upload_area(i18n),
    };

    Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(body)
        .into()
}

fn upload_area<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(text(i18n.translate("extract.upload_title")).size(typography::TITLE_SM))
        .push(muted(i18n.translate("extract.upload_desc"), typography::BODY))
        .push(
            button(text(i18n.translate("extract.choose_file")).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::OpenFileDialog)
                .style(styles::button::primary),
        );

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::UPLOAD_AREA_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::upload_area)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::Locale;

    #[test]
    fn route_segment_selects_type() {
        assert_eq!(requested_type(Some("invoice")), DocumentType::Invoice);
        assert_eq!(requested_type(Some("po")), DocumentType::PurchaseOrder);
    }

    #[test]
    fn unknown_type_falls_back_to_general() {
        assert_eq!(requested_type(Some("receipt")), DocumentType::General);
        assert_eq!(requested_type(None), DocumentType::General);
    }

    #[test]
    fn renders_upload_area_and_preview() {
        let i18n = TranslationStore::new(Locale::En).expect("embedded catalogs");
        let document = DocumentInfo::new("scan.png", 2048);
        let _empty = view(&i18n, DocumentType::Invoice, None);
        let _loaded = view(&i18n, DocumentType::Invoice, Some(&document));
    }
}
