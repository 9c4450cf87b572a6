//! Desktop navigation bar
//!
//! The session is resolved once by [`NavbarWrapper`] and handed down as a
//! prop; [`DesktopNavbar`] renders purely from that prop.

use dioxus::prelude::*;

use crate::app::components::{AccountMenu, SearchBar, ThemeToggle};
use crate::app::routes::Route;
use crate::domain::models::Identity;
use crate::server_fns::{AuthLinks, auth_links, current_identity};
use crate::shared::logging::log_session_error;

/// One item of the navbar, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    ThemeToggle,
    Home,
    Search,
    Notifications,
    Profile { handle: String },
    AccountMenu,
    SignIn,
}

/// Navbar composition for a session (or the lack of one)
pub fn nav_entries(user: Option<&Identity>) -> Vec<NavEntry> {
    let mut entries = vec![NavEntry::ThemeToggle, NavEntry::Home];

    match user {
        Some(user) => entries.extend([
            NavEntry::Search,
            NavEntry::Notifications,
            NavEntry::Profile {
                handle: user.profile_handle(),
            },
            NavEntry::AccountMenu,
        ]),
        None => entries.push(NavEntry::SignIn),
    }

    entries
}

/// Resolves the session on the server, then renders the navbar
#[component]
pub fn NavbarWrapper() -> Element {
    let session = use_server_future(move || async move {
        futures::join!(current_identity(), auth_links())
    })?;

    let (user, links) = match &*session.read() {
        Some((identity, links)) => {
            // Provider failure degrades to the anonymous navbar
            let user = match identity {
                Ok(user) => user.clone(),
                Err(e) => {
                    log_session_error(&e.to_string());
                    None
                }
            };
            (user, links.clone().unwrap_or_default())
        }
        None => (None, AuthLinks::default()),
    };

    rsx! {
        DesktopNavbar { user, links }
    }
}

#[component]
pub fn DesktopNavbar(user: Option<Identity>, links: AuthLinks) -> Element {
    let entries = nav_entries(user.as_ref());

    rsx! {
        nav { class: "c-navbar",
            for entry in entries {
                NavItem {
                    key: "{entry:?}",
                    entry: entry.clone(),
                    user: user.clone(),
                    links: links.clone(),
                }
            }
        }
    }
}

#[component]
fn NavItem(entry: NavEntry, user: Option<Identity>, links: AuthLinks) -> Element {
    match entry {
        NavEntry::ThemeToggle => rsx! { ThemeToggle {} },
        NavEntry::Home => rsx! {
            Link { to: Route::Home {}, class: "c-button c-button--ghost c-navbar__link",
                span { class: "c-navbar__icon", "🏠" }
                span { class: "c-navbar__label", "Home" }
            }
        },
        NavEntry::Search => rsx! { SearchBar {} },
        NavEntry::Notifications => rsx! {
            Link { to: Route::Notifications {}, class: "c-button c-button--ghost c-navbar__link",
                span { class: "c-navbar__icon", "🔔" }
                span { class: "c-navbar__label", "Notifications" }
            }
        },
        NavEntry::Profile { handle } => rsx! {
            Link { to: Route::Profile { handle }, class: "c-button c-button--ghost c-navbar__link",
                span { class: "c-navbar__icon", "👤" }
                span { class: "c-navbar__label", "Profile" }
            }
        },
        NavEntry::AccountMenu => match user {
            Some(user) => rsx! { AccountMenu { user, sign_out_url: links.sign_out_url } },
            None => rsx! {},
        },
        NavEntry::SignIn => rsx! {
            a { class: "c-button c-button--primary", href: "{links.sign_in_url}", "Sign In" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(username: Option<&str>) -> Identity {
        Identity {
            id: "u1".to_string(),
            username: username.map(str::to_string),
            email_address: "a.b@example.com".to_string(),
        }
    }

    #[test]
    fn test_anonymous_gets_sign_in_and_no_search() {
        let entries = nav_entries(None);
        assert_eq!(
            entries,
            vec![NavEntry::ThemeToggle, NavEntry::Home, NavEntry::SignIn]
        );
        assert!(!entries.contains(&NavEntry::Search));
    }

    #[test]
    fn test_signed_in_gets_search_and_account_links() {
        let user = identity(Some("alice"));
        let entries = nav_entries(Some(&user));
        assert_eq!(
            entries,
            vec![
                NavEntry::ThemeToggle,
                NavEntry::Home,
                NavEntry::Search,
                NavEntry::Notifications,
                NavEntry::Profile { handle: "alice".to_string() },
                NavEntry::AccountMenu,
            ]
        );
    }

    #[test]
    fn test_profile_link_falls_back_to_email() {
        let user = identity(None);
        let handle = nav_entries(Some(&user))
            .into_iter()
            .find_map(|entry| match entry {
                NavEntry::Profile { handle } => Some(handle),
                _ => None,
            })
            .unwrap();

        assert_eq!(Route::Profile { handle }.to_string(), "/profile/a.b");
    }
}
