use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ComponentError {
    String(String),
    MissingContainer(String),
    UnknownFragment(String),
    Fetch(String),
    Dom(String),
    #[cfg(target_arch = "wasm32")]
    Js(wasm_bindgen::JsValue),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComponentError::String(s) => write!(f, "{}", s),
            ComponentError::MissingContainer(s) => {
                write!(f, "Container not found: {}", s)
            }
            ComponentError::UnknownFragment(s) => {
                write!(f, "Unknown fragment: {}", s)
            }
            ComponentError::Fetch(s) => write!(f, "Fetch failed: {}", s),
            ComponentError::Dom(s) => write!(f, "DOM error: {}", s),
            #[cfg(target_arch = "wasm32")]
            ComponentError::Js(e) => write!(
                f,
                "JsError: {}",
                e.as_string().unwrap_or_else(|| "Unknown error".to_string())
            ),
        }
    }
}

impl Error for ComponentError {}

impl From<&str> for ComponentError {
    fn from(error: &str) -> Self {
        ComponentError::String(error.to_owned())
    }
}

impl From<String> for ComponentError {
    fn from(error: String) -> Self {
        ComponentError::String(error)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ComponentError {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        ComponentError::Js(error)
    }
}
