use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Home" }
            p { class: "c-page__text", "Your feed will show up here." }
        }
    }
}
