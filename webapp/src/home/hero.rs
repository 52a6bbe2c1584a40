use dioxus::prelude::*;

use page::{Section, config::HeroConfig, icon::IconName};

use crate::components::{
    button::{Button, ButtonSize, ButtonVariant},
    icon::Icon,
};

use super::tone;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    hero: HeroConfig,
    on_navigate: EventHandler<Section>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let hero = props.hero;
    let on_navigate = props.on_navigate;

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            div { class: "container",
                div { class: "hero-content animate-fade-in",
                    div { class: "hero-badge",
                        span { class: "pill", "{hero.badge}" }
                    }
                    h1 { class: "hero-title",
                        "{hero.title} "
                        span { class: "text-gradient animate-float", "{hero.highlight}" }
                    }
                    p { class: "hero-subtitle", "{hero.subtitle}" }

                    // both calls to action go through navigation, so they move the highlight too
                    div { class: "hero-actions",
                        Button {
                            size: ButtonSize::Lg,
                            class: "btn-rounded",
                            onclick: move |_| on_navigate.call(Section::Portfolio),
                            "Смотреть работы"
                            Icon { name: IconName::ArrowRight, size: 20 }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Lg,
                            class: "btn-rounded",
                            onclick: move |_| on_navigate.call(Section::Contact),
                            "Связаться"
                        }
                    }

                    div { class: "stats-grid",
                        for (index , stat) in hero.stats.iter().enumerate() {
                            div { key: "{stat.label}",
                                div { class: format!("stat-value {}", tone(index)), "{stat.value}" }
                                div { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
