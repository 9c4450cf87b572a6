//! Live user search shown in the navbar of signed-in users

use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::shared::hooks::use_user_search;
use crate::shared::services::{ResultRow, SearchDisplay};

/// Debounced search box with a dropdown of matching users
#[component]
pub fn SearchBar() -> Element {
    let search = use_user_search();

    let select_search = search.clone();
    let on_select = use_callback(move |_: ()| select_search.on_select());

    let snapshot = search.state.read().clone();
    let query = snapshot.query().to_string();
    let icon_class = if snapshot.is_searching() {
        "c-user-search__icon c-user-search__icon--spinning"
    } else {
        "c-user-search__icon"
    };

    let panel = match snapshot.display() {
        SearchDisplay::Error(message) => rsx! {
            div { class: "c-user-search__error", role: "alert", "{message}" }
        },
        SearchDisplay::Results(users) => {
            let rows: Vec<ResultRow> = users.iter().map(ResultRow::from).collect();
            rsx! {
                div { class: "c-user-search__dropdown",
                    for row in rows {
                        SearchResultItem { key: "{row.key}", row: row.clone(), on_select }
                    }
                }
            }
        }
        SearchDisplay::Idle => rsx! {},
    };

    rsx! {
        div { class: "c-user-search",
            div { class: "c-user-search__field",
                input {
                    r#type: "search",
                    class: "c-input c-user-search__input",
                    placeholder: "Search users...",
                    value: "{query}",
                    oninput: move |evt| search.on_input(evt.value()),
                }
                span { class: "{icon_class}", aria_hidden: "true", "🔍" }
            }

            {panel}
        }
    }
}

/// One dropdown row linking to the user's profile
#[component]
fn SearchResultItem(row: ResultRow, on_select: EventHandler<()>) -> Element {
    rsx! {
        Link {
            to: Route::Profile { handle: row.profile_handle.clone() },
            class: "c-user-search__row",
            onclick: move |_| on_select.call(()),
            img {
                class: "c-user-search__avatar",
                src: "{row.avatar_src}",
                alt: "{row.avatar_alt}",
            }
            div {
                p { class: "c-user-search__name", "{row.display_name}" }
                p { class: "c-user-search__handle",
                    "{row.handle}"
                    span { class: "c-user-search__followers", "{row.followers_label}" }
                }
            }
        }
    }
}
