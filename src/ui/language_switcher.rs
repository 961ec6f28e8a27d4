// SPDX-License-Identifier: MPL-2.0
//! Language switcher: a toggle button and the menu of supported locales.

use crate::app::Message;
use crate::domain::locale::Locale;
use crate::i18n::TranslationStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column};
use iced::{Element, Length};

/// Globe button showing the active locale code.
pub fn toggle<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let label = format!("🌐 {}", i18n.language().code().to_uppercase());

    button(text(label).size(typography::BODY))
        .on_press(Message::ToggleLanguageMenu)
        .style(styles::button::ghost)
        .into()
}

/// One entry per supported locale, with a check mark on the active one.
pub fn menu<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let active = i18n.language();

    let entries = Locale::ALL.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.translate("nav.language")).size(typography::CAPTION)),
        |column, &locale| {
            column.push(
                button(text(entry_label(locale, active)).size(typography::BODY))
                    .width(Length::Fill)
                    .on_press(Message::SetLanguage(locale))
                    .style(styles::button::ghost),
            )
        },
    );

    container(entries)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::menu)
        .into()
}

fn entry_label(locale: Locale, active: Locale) -> String {
    if locale == active {
        format!("{} ✓", locale.native_name())
    } else {
        locale.native_name().to_string()
    }
}
