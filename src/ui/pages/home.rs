// SPDX-License-Identifier: MPL-2.0
//! Landing page: hero, feature highlights and pricing.

use crate::app::Message;
use crate::i18n::TranslationStore;
use crate::routing::DASHBOARD_ROUTE;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{muted, styles};
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length, Theme};

/// Sections in page order. A location fragment (`/#pricing`) starts the page
/// at the matching section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Pricing,
}

impl Section {
    const ORDER: [Section; 3] = [Section::Hero, Section::About, Section::Pricing];

    /// Section for a fragment; unknown fragments start at the top.
    #[must_use]
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        match fragment {
            Some("about") => Section::About,
            Some("pricing") => Section::Pricing,
            _ => Section::Hero,
        }
    }
}

struct Feature {
    title_key: &'static str,
    description_key: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title_key: "features.instant_title",
        description_key: "features.instant_desc",
    },
    Feature {
        title_key: "features.enterprise_title",
        description_key: "features.enterprise_desc",
    },
    Feature {
        title_key: "features.bilingual_title",
        description_key: "features.bilingual_desc",
    },
];

struct Plan {
    name_key: &'static str,
    price: &'static str,
    pages: &'static str,
    description_key: &'static str,
    feature_keys: &'static [&'static str],
    cta_key: &'static str,
    featured: bool,
}

const PLANS: [Plan; 2] = [
    Plan {
        name_key: "pricing.free",
        price: "฿0",
        pages: "100",
        description_key: "pricing.free_desc",
        feature_keys: &["pricing.feature_general", "pricing.feature_standard_support"],
        cta_key: "pricing.get_started",
        featured: false,
    },
    Plan {
        name_key: "pricing.pro",
        price: "฿990",
        pages: "1,000",
        description_key: "pricing.pro_desc",
        feature_keys: &[
            "pricing.feature_templates",
            "pricing.feature_priority_support",
            "pricing.feature_export",
        ],
        cta_key: "pricing.upgrade_now",
        featured: true,
    },
];

/// Renders the landing page from `start` onward. Calls to action sign in,
/// or open the dashboard when already signed in.
pub fn view<'a>(i18n: &TranslationStore, start: Section, authenticated: bool) -> Element<'a, Message> {
    let cta = if authenticated {
        Message::Navigate(DASHBOARD_ROUTE.to_string())
    } else {
        Message::Login
    };

    Section::ORDER
        .iter()
        .skip_while(|section| **section != start)
        .fold(Column::new().width(Length::Fill), |column, section| {
            column.push(match section {
                Section::Hero => hero(i18n, cta.clone()),
                Section::About => features(i18n),
                Section::Pricing => pricing(i18n, &cta),
            })
        })
        .into()
}

fn hero<'a>(i18n: &TranslationStore, cta: Message) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(720.0)
        .align_x(Horizontal::Center)
        .push(
            text(i18n.translate("hero.title"))
                .size(typography::DISPLAY)
                .align_x(Horizontal::Center),
        )
        .push(
            muted(i18n.translate("hero.subtitle"), typography::BODY_LG).align_x(Horizontal::Center),
        )
        .push(
            button(text(i18n.translate("hero.cta")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .on_press(cta)
                .style(styles::button::primary),
        );

    container(content)
        .width(Length::Fill)
        .padding([spacing::XXL * 2.0, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

fn features<'a>(i18n: &TranslationStore) -> Element<'a, Message> {
    let cards = FEATURES.iter().fold(Row::new().spacing(spacing::LG), |row, feature| {
        row.push(
            container(
                Column::new()
                    .spacing(spacing::XS)
                    .push(text(i18n.translate(feature.title_key)).size(typography::TITLE_SM))
                    .push(muted(i18n.translate(feature.description_key), typography::BODY)),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card),
        )
    });

    container(cards)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .style(styles::container::section)
        .into()
}

fn pricing<'a>(i18n: &TranslationStore, cta: &Message) -> Element<'a, Message> {
    let plans = PLANS.iter().fold(Row::new().spacing(spacing::LG), |row, plan| {
        row.push(plan_card(i18n, plan, cta.clone()))
    });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(text(i18n.translate("pricing.title")).size(typography::TITLE_LG))
        .push(muted(i18n.translate("pricing.subtitle"), typography::BODY_LG))
        .push(plans);

    container(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .align_x(Horizontal::Center)
        .into()
}

fn plan_card<'a>(i18n: &TranslationStore, plan: &Plan, cta: Message) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM);

    if plan.featured {
        column = column.push(
            text(i18n.translate("pricing.most_popular"))
                .size(typography::CAPTION)
                .color(palette::PRIMARY_500),
        );
    }

    column = column
        .push(text(i18n.translate(plan.name_key)).size(typography::TITLE_MD))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(text(plan.price).size(typography::TITLE_LG))
                .push(muted(i18n.translate("pricing.per_month"), typography::BODY)),
        )
        .push(muted(i18n.translate(plan.description_key), typography::BODY))
        .push(text(format!("✓ {} {}", plan.pages, i18n.translate("pricing.pages_month"))).size(typography::BODY));

    column = plan.feature_keys.iter().fold(column, |column, key| {
        column.push(text(format!("✓ {}", i18n.translate(key))).size(typography::BODY))
    });

    let button_style: fn(&Theme, button::Status) -> button::Style = if plan.featured {
        styles::button::primary
    } else {
        styles::button::tile
    };

    column = column.push(
        button(
            text(i18n.translate(plan.cta_key))
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .on_press(cta)
        .style(button_style),
    );

    let card_style: fn(&Theme) -> container::Style = if plan.featured {
        styles::container::featured_card
    } else {
        styles::container::card
    };

    container(column)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::LG)
        .style(card_style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::Locale;

    #[test]
    fn fragment_selects_section() {
        assert_eq!(Section::from_fragment(Some("pricing")), Section::Pricing);
        assert_eq!(Section::from_fragment(Some("about")), Section::About);
        assert_eq!(Section::from_fragment(Some("nowhere")), Section::Hero);
        assert_eq!(Section::from_fragment(None), Section::Hero);
    }

    #[test]
    fn pro_plan_is_featured() {
        let featured: Vec<_> = PLANS.iter().filter(|plan| plan.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].price, "฿990");
        assert_eq!(featured[0].pages, "1,000");
    }

    #[test]
    fn landing_page_renders_in_both_languages() {
        for locale in Locale::ALL {
            let i18n = TranslationStore::new(locale).expect("embedded catalogs");
            let _top = view(&i18n, Section::Hero, false);
            let _pricing = view(&i18n, Section::Pricing, true);
        }
    }
}
