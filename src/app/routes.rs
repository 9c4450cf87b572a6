use dioxus::prelude::*;

use crate::app::layouts::NavbarWrapper;
use crate::app::pages::{Home, Notifications, Profile};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/notifications")]
    Notifications {},

    #[route("/profile/:handle")]
    Profile { handle: String },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs from assets/css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            header { class: "c-layout__header",
                Link { to: Route::Home {}, class: "c-layout__logo", "Social" }
                NavbarWrapper {}
            }

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
