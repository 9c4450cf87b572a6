// Custom Dioxus hooks
pub mod use_theme;
pub mod use_user_search;

pub use use_theme::{use_theme, Theme, save_theme};
pub use use_user_search::{use_user_search, ServerSearch, UseUserSearch};
