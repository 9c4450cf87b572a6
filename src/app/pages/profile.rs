use dioxus::prelude::*;

#[component]
pub fn Profile(handle: String) -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "@{handle}" }
            p { class: "c-page__text", "Profile of {handle}" }
        }
    }
}
