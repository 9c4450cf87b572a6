use dioxus::prelude::*;

#[component]
pub fn Notifications() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Notifications" }
            p { class: "c-page__text", "You're all caught up." }
        }
    }
}
