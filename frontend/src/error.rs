use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no {0} element")]
    MissingElement(&'static str),
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },
    #[error("DOM operation `{op}` failed: {message}")]
    Operation { op: &'static str, message: String },
}

impl DomError {
    /// Wraps a thrown JS value, keeping whatever message it carries.
    pub fn js(op: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                web_sys::js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Operation { op, message }
    }

    pub fn selector(selector: &str, value: JsValue) -> Self {
        match DomError::js("querySelector", value) {
            DomError::Operation { message, .. } => DomError::Selector {
                selector: selector.to_string(),
                message,
            },
            other => other,
        }
    }
}
