//! Page copy in the visitor's language.
//!
//! The language comes from the browser, the dictionaries are compiled in,
//! and each translation is a one-shot rewrite of the rendered markup.

pub mod bridge;
pub mod dictionary;
pub mod engine;
pub mod locale;
pub mod pictograph;
pub mod selectors;
pub mod substitute;
mod translations;

pub use dictionary::Translations;
pub use engine::{Localizer, TranslationOutcome};
pub use locale::LanguagePrefs;
pub use selectors::SelectorMap;
