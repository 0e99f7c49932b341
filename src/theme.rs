// Light/dark theme flag, the colors the particle field draws with in each,
// and (in the browser) the controller that persists the user's choice.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Theme {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_storage_value(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Picks the initial theme. Any saved value wins and only "dark" means
    /// dark; with nothing saved the system color-scheme preference decides.
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Theme {
        match saved {
            Some(value) if !value.is_empty() => Theme::from_dark_flag(value == "dark"),
            _ => Theme::from_dark_flag(system_prefers_dark),
        }
    }
}

const ACCENT: Color = Color::from_rgb_u32(0x2f81f7, 1.0);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldPalette {
    pub particle: Color,
    pub link: Color,
}

impl FieldPalette {
    pub fn for_theme(theme: Theme) -> FieldPalette {
        match theme {
            Theme::Dark => FieldPalette {
                particle: ACCENT.with_alpha(0.6),
                link: Color::rgba(208, 215, 222, 0.12),
            },
            Theme::Light => FieldPalette {
                particle: ACCENT.with_alpha(0.45),
                link: Color::rgba(87, 96, 106, 0.12),
            },
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::dom::{document_is_dark, ThemeController};

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::Theme;
    use crate::config::PageConfig;
    use wasm_bindgen::prelude::*;

    const DARK_CLASS: &str = "dark";

    pub fn document_is_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map_or(false, |el| el.class_list().contains(DARK_CLASS))
    }

    fn apply(theme: Theme) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            let result = if theme.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
            if result.is_err() {
                log::warn!("could not update the document theme class");
            }
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    fn system_prefers_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }

    // Owns the page theme; the particle field only ever reads the class it sets
    #[wasm_bindgen]
    pub struct ThemeController {
        theme: Theme,
        storage_key: String,
    }

    #[wasm_bindgen]
    impl ThemeController {
        /// Reads the saved choice under the page config's `themeStorageKey`.
        pub fn init(config_json: Option<String>) -> Result<ThemeController, JsValue> {
            let config = match config_json {
                Some(json) => PageConfig::from_json(&json)?,
                None => PageConfig::default(),
            };
            let storage_key = config.theme_storage_key;
            let saved = storage().and_then(|s| s.get_item(&storage_key).ok().flatten());
            let theme = Theme::resolve(saved.as_deref(), system_prefers_dark());
            apply(theme);
            log::debug!("initial theme {:?} (saved: {:?})", theme, saved);
            Ok(ThemeController { theme, storage_key })
        }

        pub fn toggle(&mut self) -> bool {
            self.theme = self.theme.toggled();
            apply(self.theme);
            if let Some(storage) = storage() {
                if storage
                    .set_item(&self.storage_key, self.theme.storage_value())
                    .is_err()
                {
                    log::warn!("could not persist theme preference");
                }
            }
            self.theme.is_dark()
        }

        #[wasm_bindgen(getter)]
        pub fn is_dark(&self) -> bool {
            self.theme.is_dark()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_choice_wins_over_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn system_preference_used_when_nothing_saved() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
    }

    #[test]
    fn unrecognised_saved_value_means_light() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("Dark"), true), Theme::Light);
    }

    #[test]
    fn toggle_round_trips_through_storage_value() {
        let theme = Theme::Dark.toggled();
        assert_eq!(theme, Theme::Light);
        assert_eq!(Theme::from_storage_value(theme.storage_value()), Some(theme));
    }

    #[test]
    fn palettes_differ_per_theme() {
        let dark = FieldPalette::for_theme(Theme::Dark);
        let light = FieldPalette::for_theme(Theme::Light);
        assert_eq!(dark.particle.to_css(), "rgba(47, 129, 247, 0.6)");
        assert_eq!(light.particle.to_css(), "rgba(47, 129, 247, 0.45)");
        assert_eq!(dark.link.to_css(), "rgba(208, 215, 222, 0.12)");
        assert_eq!(light.link.to_css(), "rgba(87, 96, 106, 0.12)");
    }
}
