pub mod account_menu;
pub mod button;
pub mod search_bar;
pub mod theme_toggle;

pub use account_menu::AccountMenu;
pub use button::{Button, ButtonVariant};
pub use search_bar::SearchBar;
pub use theme_toggle::ThemeToggle;
