use dioxus::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
    Icon,
}

// a button without onclick renders and focuses normally but does nothing
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    variant: ButtonVariant,
    #[props(default)]
    size: ButtonSize,
    #[props(default)]
    class: String,
    #[props(default)]
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = match props.variant {
        ButtonVariant::Default => "btn-default",
        ButtonVariant::Outline => "btn-outline",
        ButtonVariant::Ghost => "btn-ghost",
    };

    let size = match props.size {
        ButtonSize::Default => "",
        ButtonSize::Lg => "btn-lg",
        ButtonSize::Icon => "btn-icon",
    };

    let onclick = props.onclick;

    rsx! {
        button {
            class: "btn {variant} {size} {props.class}",
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
