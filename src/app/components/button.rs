use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Ghost,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = match variant.unwrap_or(ButtonVariant::Primary) {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Ghost => "c-button--ghost",
    };

    rsx! {
        button {
            class: "c-button {variant_class} {class}",
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
