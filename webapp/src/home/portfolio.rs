use dioxus::prelude::*;

use page::{Section, content::portfolio_categories, icon::IconName};

use crate::components::{
    button::{Button, ButtonSize, ButtonVariant},
    card::{Card, CardContent},
    icon::Icon,
};

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        section { id: Section::Portfolio.id(), class: "page-section muted",
            div { class: "container",
                div { class: "section-header animate-fade-in",
                    h2 { class: "section-title", "Портфолио" }
                    p { class: "section-subtitle", "Примеры моих работ в различных категориях" }
                }

                div { class: "card-grid",
                    for (index , category) in portfolio_categories().iter().enumerate() {
                        Card {
                            key: "{category.id}",
                            class: "portfolio-card animate-fade-in",
                            style: format!("animation-delay: {}ms", index * 100),
                            CardContent {
                                div {
                                    class: "portfolio-tile",
                                    style: format!("background: {}", gradient_css(category.gradient)),
                                    Icon { name: category.icon, size: 32 }
                                }
                                h3 { class: "portfolio-title", "{category.title}" }
                                p { class: "portfolio-count", "{category.count} работ" }
                                div { class: "portfolio-more",
                                    "Смотреть"
                                    Icon { name: IconName::ArrowRight, size: 16 }
                                }
                            }
                        }
                    }
                }

                // no gallery page exists yet
                div { class: "portfolio-footer",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Lg,
                        class: "btn-rounded",
                        "Показать все работы"
                        Icon { name: IconName::ExternalLink, size: 20 }
                    }
                }
            }
        }
    }
}

fn gradient_css(gradient: page::content::Gradient) -> String {
    gradient
        .to_css()
        .unwrap_or_else(|| String::from("var(--primary)"))
}
