use dioxus::prelude::*;
use crate::shared::hooks::use_theme;
use crate::shared::hooks::use_theme::{apply_theme_class, save_theme};

/// Light/dark switch, always present in the navbar
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_theme();

    let toggle_theme = move |_| {
        let new_theme = current_theme().toggled();
        current_theme.set(new_theme);
        apply_theme_class(new_theme);
        save_theme(new_theme);
    };

    // Tooltip shows target state (what will happen on click)
    let tooltip = format!("Switch to {} theme", current_theme().toggled().display_name());

    let toggle_class = if current_theme().is_dark() {
        "c-theme-toggle"
    } else {
        "c-theme-toggle c-theme-toggle--light"
    };

    rsx! {
        button {
            class: "{toggle_class}",
            r#type: "button",
            title: "{tooltip}",
            aria_label: "Toggle theme",
            onclick: toggle_theme,

            // Ball (sun/moon)
            span { class: "c-theme-toggle__ball" }
        }
    }
}
