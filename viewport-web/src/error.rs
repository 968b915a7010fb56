use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding a viewport to the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no global `window` is available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
    #[error("no element matches selector `{0}`")]
    SelectorNotFound(String),
    #[error("element is not an HTMLElement")]
    NotAnHtmlElement,
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
