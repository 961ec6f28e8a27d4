// SPDX-License-Identifier: MPL-2.0
//! One module per routed view.

pub mod dashboard;
pub mod extraction;
pub mod history;
pub mod home;
pub mod not_found;
pub mod templates;

use crate::app::Message;
use crate::domain::document::DocumentType;
use crate::i18n::TranslationStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{muted, styles};
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column};
use iced::{Element, Length};

/// Placeholder for an empty history, pointing at a first extraction.
pub(crate) fn empty_state<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(text(i18n.translate("empty.no_history")).size(typography::TITLE_SM))
        .push(muted(i18n.translate("empty.no_history_desc"), typography::BODY))
        .push(
            button(text(i18n.translate("empty.get_started")).size(typography::BODY))
                .on_press(Message::Navigate(DocumentType::General.extraction_path()))
                .style(styles::button::primary),
        );

    container(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(styles::container::card)
        .into()
}
