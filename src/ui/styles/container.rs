// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised surface for cards (pricing plans, usage, preview).
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Highlighted card for the recommended plan.
pub fn featured_card(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::PRIMARY_500,
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..card(theme)
    }
}

/// Muted band behind a page section.
pub fn section(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.weak.color)),
        ..Default::default()
    }
}

/// Top header bar with a bottom border.
pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Dark sidebar of the signed-in layout.
pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SIDEBAR_BG)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Usage meter panel inside the sidebar.
pub fn sidebar_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.5,
            ..palette::SIDEBAR_ACCENT
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled square or circle behind the brand mark and avatar initial.
pub fn badge(color: Color, rounded: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: rounded.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drop target on the extraction page.
pub fn upload_area(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette::PRIMARY_400,
            width: 2.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Dropdown panel of the language switcher.
pub fn menu(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::MD,
        ..card(theme)
    }
}

/// Inline banner for recoverable errors.
pub fn notice(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Pill-shaped status label; `radius::FULL` keeps the ends round.
pub fn status_pill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..color })),
        text_color: Some(color),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
