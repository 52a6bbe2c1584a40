use dioxus::prelude::*;

use page::{PageSnapshot, Section, nav::NavLink};

use crate::components::{
    button::{Button, ButtonSize, ButtonVariant},
    icon::Icon,
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    link: NavLink,
    on_navigate: EventHandler<Section>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let link = props.link;
    let on_navigate = props.on_navigate;

    rsx! {
        button {
            class: link.class(),
            onclick: move |_| on_navigate.call(link.section),
            "{link.label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    brand: String,
    snapshot: PageSnapshot,
    on_navigate: EventHandler<Section>,
    on_toggle_theme: EventHandler<()>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let on_navigate = props.on_navigate;
    let on_toggle_theme = props.on_toggle_theme;

    rsx! {
        header { class: "app-header",
            div { class: "container nav-container",
                h1 { class: "brand text-gradient", "{props.brand}" }

                nav { class: "nav-links",
                    for link in props.snapshot.nav_links() {
                        NavBarButton { key: "{link.section}", link, on_navigate }
                    }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: "btn-rounded",
                    onclick: move |_| on_toggle_theme.call(()),
                    Icon { name: props.snapshot.theme.toggle_icon(), size: 20 }
                }
            }
        }
    }
}
