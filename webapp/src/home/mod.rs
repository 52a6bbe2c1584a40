use dioxus::prelude::*;

use page::{PageController, Section, config::SiteConfig};

use crate::{common::document::WebDocument, components::navigation::NavBar};

mod about;
use about::About;

mod contact;
use contact::Contact;

mod hero;
use hero::Hero;

mod portfolio;
use portfolio::Portfolio;

mod services;
use services::Services;

// colors cycled through by stat tiles and contact cards
const TONES: [&str; 3] = ["tone-primary", "tone-secondary", "tone-accent"];

pub(crate) fn tone(index: usize) -> &'static str {
    TONES[index % TONES.len()]
}

// Landing
//
// owns the page controller; every child gets a snapshot of the state and the two
// callbacks that mutate it.  creating the controller applies the theme marker once,
// and each toggle re-applies it before the signal notifies the re-render
#[component]
pub fn Landing() -> Element {
    let config = use_context::<SiteConfig>();

    let mut controller = use_signal(|| PageController::new(WebDocument::new()));
    let snapshot = controller.read().snapshot();

    let on_navigate = use_callback(move |section: Section| {
        controller.write().navigate_to(section);
    });

    let on_toggle_theme = use_callback(move |_: ()| {
        controller.write().toggle_theme();
    });

    rsx! {
        div { class: "page",
            NavBar {
                brand: config.brand.clone(),
                snapshot,
                on_navigate,
                on_toggle_theme,
            }

            Hero { hero: config.hero.clone(), on_navigate }
            Portfolio {}
            Services {}
            About { about: config.about.clone() }
            Contact { contact: config.contact.clone() }

            footer { class: "page-footer",
                div { class: "container",
                    p { "{config.footer}" }
                }
            }
        }
    }
}
