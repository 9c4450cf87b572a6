use dioxus::prelude::*;
use std::str::FromStr;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const THEME_STORAGE_KEY: &str = "theme";

/// Color scheme of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Theme matching the system preference
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Theme state, restored from localStorage (or the system preference) on mount
pub fn use_theme() -> Signal<Theme> {
    let current_theme = use_signal(|| Theme::Light);

    #[cfg(target_arch = "wasm32")]
    {
        let mut current_theme = current_theme;
        use_effect(move || {
            let stored = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
                .and_then(|saved| saved.parse::<Theme>().ok());

            let theme = stored.unwrap_or_else(|| {
                let prefers_dark = web_sys::window()
                    .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
                    .map(|query| query.matches())
                    .unwrap_or(false);
                Theme::system_default(prefers_dark)
            });

            current_theme.set(theme);
            apply_theme_class(theme);
        });
    }

    current_theme
}

/// Swap the theme class on the document element
#[cfg(target_arch = "wasm32")]
pub fn apply_theme_class(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme_class(_theme: Theme) {
    // No-op on server
}

/// Save theme to localStorage
#[cfg(target_arch = "wasm32")]
pub fn save_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_theme(_theme: Theme) {
    // No-op on server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_system_default() {
        assert!(Theme::system_default(true).is_dark());
        assert!(!Theme::system_default(false).is_dark());
    }
}
