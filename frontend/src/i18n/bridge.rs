//! `window.SnapBoostI18n`: lets page scripts and the console re-run the
//! translation, read the raw dictionaries and re-wrap pictographs.

use std::rc::Rc;

use log::info;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Object, Reflect};

use super::engine::{Localizer, TranslationOutcome};
use super::pictograph::wrap_subtree;
use crate::dom::{BrowserDom, Dom};
use crate::error::DomError;

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), DomError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| DomError::js("Reflect.set", e))
}

pub fn install(localizer: Rc<Localizer>, dom: BrowserDom, locale: &str) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let namespace: JsValue = Object::new().into();

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let translations = localizer
        .translations()
        .serialize(&serializer)
        .map_err(|e| DomError::Operation {
            op: "serialize translations",
            message: e.to_string(),
        })?;
    set(&namespace, "translations", &translations)?;
    set(&namespace, "locale", &JsValue::from_str(locale))?;

    let translate = {
        let localizer = localizer.clone();
        let dom = dom.clone();
        let namespace = namespace.clone();
        Closure::<dyn Fn(String) -> bool>::new(move |tag: String| {
            match localizer.translate(&dom, &tag) {
                TranslationOutcome::Applied { locale, .. } => {
                    let _ = set(&namespace, "locale", &JsValue::from_str(locale));
                    true
                }
                TranslationOutcome::Untranslated { .. } => false,
            }
        })
    };
    set(&namespace, "translate", &translate.into_js_value())?;

    let class = localizer.config().emoji_class;
    let wrap_emojis = Closure::<dyn Fn() -> u32>::new(move || match dom.body() {
        Ok(body) => wrap_subtree(&dom, &body, class) as u32,
        Err(e) => {
            log::warn!("Cannot wrap pictographs: {}", e);
            0
        }
    });
    set(&namespace, "wrapEmojis", &wrap_emojis.into_js_value())?;

    let name = localizer.config().namespace;
    set(&window, name, &namespace)?;
    info!("Installed window.{}", name);
    Ok(())
}
