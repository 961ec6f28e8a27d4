// SPDX-License-Identifier: MPL-2.0
//! Fallback for locations outside the route table.

use crate::app::Message;
use crate::i18n::TranslationStore;
use crate::routing::PUBLIC_ROUTE;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{muted, styles};
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column};
use iced::{Element, Length};

pub fn view<'a>(i18n: &TranslationStore, path: &str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text("404").size(typography::DISPLAY))
        .push(text(i18n.translate("notfound.title")).size(typography::TITLE_MD))
        .push(muted(path.to_string(), typography::BODY))
        .push(
            button(text(i18n.translate("notfound.back")).size(typography::BODY))
                .on_press(Message::Navigate(PUBLIC_ROUTE.to_string()))
                .style(styles::button::primary),
        );

    container(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
}
