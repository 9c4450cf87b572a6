pub mod navbar;

pub use navbar::{DesktopNavbar, NavEntry, NavbarWrapper, nav_entries};
