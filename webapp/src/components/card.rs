use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    #[props(default)]
    class: String,
    #[props(default)]
    style: String,
    children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div { class: "card {props.class}", style: "{props.style}", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CardContentProps {
    children: Element,
}

#[component]
pub fn CardContent(props: CardContentProps) -> Element {
    rsx! {
        div { class: "card-content", {props.children} }
    }
}
