//! Errors raised at the crate boundary.
//!
//! The layout engine itself is infallible; these cover decoding the input
//! payload and handing results back to JavaScript.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("failed to decode graph JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid graph payload: {0}")]
    Payload(String),
    #[error("failed to encode layout result: {0}")]
    Encode(String),
}

impl From<GraphError> for JsValue {
    fn from(err: GraphError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
