use dioxus::prelude::*;

use crate::app::components::button::{Button, ButtonVariant};
use crate::domain::models::Identity;

/// First character of the handle, shown on the avatar button
pub fn avatar_initial(user: &Identity) -> String {
    user.profile_handle()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Account control for the signed-in user: who is signed in, and sign out
#[component]
pub fn AccountMenu(user: Identity, sign_out_url: String) -> Element {
    let mut open = use_signal(|| false);
    let initial = avatar_initial(&user);

    rsx! {
        div { class: "c-account-menu",
            Button {
                variant: ButtonVariant::Ghost,
                class: "c-account-menu__avatar",
                onclick: move |_| open.toggle(),
                "{initial}"
            }

            if open() {
                div { class: "c-account-menu__panel",
                    p { class: "c-account-menu__email", "{user.email_address}" }
                    a { class: "c-account-menu__link", href: "{sign_out_url}", "Sign out" }
                }
            }
        }
    }
}
