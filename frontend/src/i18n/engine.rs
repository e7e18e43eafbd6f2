use chrono::Datelike;
use log::{debug, info, warn};

use crate::config::I18nConfig;
use crate::dom::Dom;
use crate::error::DomError;

use super::dictionary::{Dictionary, TextValue, Translations};
use super::locale::{detect, LanguagePrefs};
use super::pictograph;
use super::selectors::{Locator, SelectorMap, Shape, Slot};
use super::substitute::{replace_list, substitute_items, substitute_text};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// No dictionary for the requested language; the page was not touched.
    Untranslated { requested: String },
    Applied {
        locale: &'static str,
        applied: usize,
        skipped: usize,
    },
}

/// Rewrites the page copy for one language at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Localizer {
    translations: Translations,
    selectors: SelectorMap,
    config: I18nConfig,
    year: i32,
}

impl Localizer {
    pub fn new(translations: Translations, selectors: SelectorMap, config: I18nConfig) -> Self {
        Self {
            translations,
            selectors,
            config,
            year: chrono::Local::now().year(),
        }
    }

    /// Pins the value used for `{year}`.
    #[cfg(test)]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    pub fn is_rtl(&self, locale: &str) -> bool {
        self.config.rtl_locales.iter().any(|rtl| *rtl == locale)
    }

    pub fn fill_placeholders(&self, text: &str) -> String {
        text.replace("{year}", &self.year.to_string())
    }

    /// Detects the browser language and translates into it.
    pub fn translate_detected<D: Dom>(&self, dom: &D, prefs: &LanguagePrefs) -> TranslationOutcome {
        let tag = detect(prefs, self.config.default_locale);
        self.translate_with_fallback(dom, &tag, prefs.reported())
    }

    pub fn translate<D: Dom>(&self, dom: &D, tag: &str) -> TranslationOutcome {
        self.translate_with_fallback(dom, tag, None)
    }

    pub fn translate_with_fallback<D: Dom>(&self, dom: &D, tag: &str, reported: Option<&str>) -> TranslationOutcome {
        let Some((locale, dictionary)) = self.translations.resolve(tag, reported) else {
            info!("No translations for '{}', keeping the default copy", tag);
            return TranslationOutcome::Untranslated {
                requested: tag.to_string(),
            };
        };

        match dom.body() {
            Ok(body) => {
                let wrapped = pictograph::wrap_subtree(dom, &body, self.config.emoji_class);
                debug!("Wrapped {} pictographs", wrapped);
            }
            Err(e) => warn!("Skipping pictograph wrapping: {}", e),
        }

        debug!("Applying '{}' dictionary ({} entries)", locale, dictionary.len());
        let (applied, skipped) = self.apply_dictionary(dom, dictionary);

        if let Err(e) = self.set_document_language(dom, locale) {
            warn!("Could not set document language: {}", e);
        }

        info!(
            "Translated page to '{}' ({} elements updated, {} skipped)",
            locale, applied, skipped
        );
        TranslationOutcome::Applied {
            locale,
            applied,
            skipped,
        }
    }

    fn apply_dictionary<D: Dom>(&self, dom: &D, dictionary: &Dictionary) -> (usize, usize) {
        let mut applied = 0;
        let mut skipped = 0;
        for slot in self.selectors.slots() {
            let Some(value) = dictionary.get(slot.key) else {
                debug!("No '{}' entry, leaving element as is", slot.key);
                skipped += 1;
                continue;
            };
            match self.apply_slot(dom, slot, value) {
                Ok(true) => applied += 1,
                Ok(false) => skipped += 1,
                Err(e) => {
                    warn!("Failed to translate '{}': {}", slot.key, e);
                    skipped += 1;
                }
            }
        }
        (applied, skipped)
    }

    fn apply_slot<D: Dom>(&self, dom: &D, slot: &Slot, value: &TextValue) -> Result<bool, DomError> {
        let Some(element) = self.locate(dom, slot)? else {
            if slot.required {
                warn!("Element for '{}' not found", slot.key);
            } else {
                debug!("Optional element for '{}' not on page", slot.key);
            }
            return Ok(false);
        };
        let marker = self.config.emoji_class;
        match (slot.shape, value) {
            (Shape::Text, TextValue::One(text)) => {
                substitute_text(dom, &element, &self.fill_placeholders(text), marker)?;
            }
            (Shape::TagList { item }, TextValue::Many(entries)) => {
                let filled: Vec<String> = entries.iter().map(|e| self.fill_placeholders(e)).collect();
                let filled: Vec<&str> = filled.iter().map(String::as_str).collect();
                substitute_items(dom, &element, item, &filled, marker)?;
            }
            (Shape::BulletList, TextValue::Many(entries)) => {
                let filled: Vec<String> = entries.iter().map(|e| self.fill_placeholders(e)).collect();
                let filled: Vec<&str> = filled.iter().map(String::as_str).collect();
                replace_list(dom, &element, &filled)?;
            }
            (shape, _) => {
                warn!("'{}' has the wrong shape for {:?}", slot.key, shape);
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn locate<D: Dom>(&self, dom: &D, slot: &Slot) -> Result<Option<D::Node>, DomError> {
        let tagged = format!("[data-i18n=\"{}\"]", slot.key);
        if let Some(node) = dom.query(None, &tagged)? {
            return Ok(Some(node));
        }
        match slot.locator {
            Locator::Css(selector) => dom.query(None, selector),
            Locator::Nth {
                container,
                item,
                index,
                part,
            } => {
                let Some(container) = dom.query(None, container)? else {
                    return Ok(None);
                };
                let items = dom.query_all(Some(&container), item)?;
                match items.get(index) {
                    Some(found) => dom.query(Some(found), part),
                    None => Ok(None),
                }
            }
        }
    }

    fn set_document_language<D: Dom>(&self, dom: &D, locale: &str) -> Result<(), DomError> {
        let root = dom.document_element()?;
        dom.set_attribute(&root, "lang", locale)?;
        let dir = if self.is_rtl(locale) { "rtl" } else { "ltr" };
        dom.set_attribute(&root, "dir", dir)
    }
}
