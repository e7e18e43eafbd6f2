use wasm_bindgen::JsValue;
use web_sys::Navigator;

/// What the browser says about the user's languages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguagePrefs {
    /// `navigator.languages`, most preferred first.
    pub languages: Vec<String>,
    /// `navigator.language`.
    pub language: Option<String>,
}

impl LanguagePrefs {
    pub fn from_navigator(navigator: &Navigator) -> Self {
        let languages = navigator
            .languages()
            .iter()
            .filter_map(|value: JsValue| value.as_string())
            .collect();
        Self {
            languages,
            language: navigator.language(),
        }
    }

    pub fn from_window() -> Self {
        web_sys::window()
            .map(|window| Self::from_navigator(&window.navigator()))
            .unwrap_or_default()
    }

    /// The raw tag detection was based on, before any normalization.
    pub fn reported(&self) -> Option<&str> {
        self.languages
            .iter()
            .chain(self.language.iter())
            .map(|tag| tag.trim())
            .find(|tag| !tag.is_empty())
    }
}

/// Lowercase primary language subtag: `"pt-BR"` and `"pt_BR"` give `"pt"`.
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// First preferred language, then the single reported one, then `default`.
pub fn detect(prefs: &LanguagePrefs, default: &str) -> String {
    prefs
        .reported()
        .map(primary_subtag)
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| default.to_string())
}
