use dioxus::prelude::*;

use page::{Section, config::AboutConfig, content::tools};

use crate::components::card::{Card, CardContent};

#[derive(Clone, PartialEq, Props)]
pub struct AboutProps {
    about: AboutConfig,
}

#[component]
pub fn About(props: AboutProps) -> Element {
    rsx! {
        section { id: Section::About.id(), class: "page-section muted",
            div { class: "container",
                div { class: "about animate-fade-in",
                    h2 { class: "section-title", "О мне" }
                    Card { class: "about-card",
                        CardContent {
                            // the lead paragraph is full strength, the rest muted
                            for (index , paragraph) in props.about.paragraphs.iter().enumerate() {
                                p {
                                    key: "{index}",
                                    class: if index == 0 { "about-text" } else { "about-text muted" },
                                    "{paragraph}"
                                }
                            }
                            div { class: "tool-tags",
                                for tool in tools() {
                                    span { key: "{tool}", class: "pill", "{tool}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
