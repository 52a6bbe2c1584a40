use dioxus::prelude::*;

use page::{Section, content::services};

use crate::components::icon::Icon;

#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: Section::Services.id(), class: "page-section",
            div { class: "container",
                div { class: "section-header animate-fade-in",
                    h2 { class: "section-title", "Услуги" }
                    p { class: "section-subtitle", "Что я могу сделать для вас" }
                }

                div { class: "card-grid",
                    for (index , service) in services().iter().enumerate() {
                        div {
                            key: "{service.title}",
                            class: "service animate-fade-in",
                            style: format!("animation-delay: {}ms", index * 100),
                            div { class: "service-tile",
                                Icon { name: service.icon, size: 36 }
                            }
                            h3 { class: "service-title", "{service.title}" }
                            p { class: "service-desc", "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}
