// Error type shared by the field, its configuration and the contribution loader.
// Exported functions convert it into a JsValue at the wasm boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("2d drawing context is unavailable")]
    ContextUnavailable,

    #[error("invalid field config: {0}")]
    InvalidConfig(String),

    #[error("malformed config json: {0}")]
    Config(#[from] serde_json::Error),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("request failed: {0}")]
    Fetch(String),

    #[error("request returned status {0}")]
    Status(u16),
}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        FieldError::Js(message)
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
