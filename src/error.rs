use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("canvas unavailable: {0}")]
    Canvas(String),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid page dictionary: {0}")]
    Dictionary(#[from] serde_json::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
