use dioxus::prelude::*;

use page::{Section, config::ContactConfig, icon::IconName};

use crate::components::{
    button::{Button, ButtonSize},
    card::{Card, CardContent},
    icon::Icon,
};

use super::tone;

#[derive(Clone, PartialEq, Props)]
pub struct ContactProps {
    contact: ContactConfig,
    // hook for a future form or mailer integration; the page ships without one
    #[props(default)]
    on_write: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn Contact(props: ContactProps) -> Element {
    let contact = props.contact;
    let on_write = props.on_write;

    rsx! {
        section { id: Section::Contact.id(), class: "page-section",
            div { class: "container",
                div { class: "contact animate-fade-in",
                    h2 { class: "section-title", "{contact.title}" }
                    p { class: "section-subtitle", "{contact.subtitle}" }

                    div { class: "contact-grid",
                        for (index , channel) in contact.channels.iter().enumerate() {
                            Card { key: "{channel.label}", class: "contact-card",
                                CardContent {
                                    div { class: format!("contact-icon {}", tone(index)),
                                        Icon { name: channel.icon, size: 24 }
                                    }
                                    div { class: "contact-label", "{channel.label}" }
                                    div { class: "contact-value", "{channel.value}" }
                                }
                            }
                        }
                    }

                    Button {
                        size: ButtonSize::Lg,
                        class: "btn-rounded btn-gradient",
                        onclick: move |evt| {
                            if let Some(handler) = on_write {
                                handler.call(evt);
                            }
                        },
                        "Написать мне"
                        Icon { name: IconName::Send, size: 20 }
                    }
                }
            }
        }
    }
}
