use wasm_bindgen::JsValue;

/// Errors raised while wiring behaviors onto the page.
///
/// Each behavior installs independently, so one of these only ever disables
/// the behavior that produced it.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// `window` is not available (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// A required element is absent from the markup.
    #[error("missing {what} element ({selector})")]
    MissingElement { what: &'static str, selector: String },
    /// The JSON config block could not be parsed.
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),
    /// The JSON config block parsed but holds unusable values.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}
