//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Window};

use crate::config::{AppConfig, CONFIG_ATTRIBUTES, MOUNT_ID};
use crate::core::error::ConfigError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the element the application mounts into.
pub fn mount_element() -> Option<Element> {
    window()?.document()?.get_element_by_id(MOUNT_ID)
}

/// Read [`AppConfig`] overrides from the mount element's `data-*` attributes.
pub fn read_config(element: Option<&Element>) -> (AppConfig, Vec<ConfigError>) {
    let Some(element) = element else {
        return (AppConfig::default(), Vec::new());
    };

    let values: Vec<(&str, String)> = CONFIG_ATTRIBUTES
        .iter()
        .filter_map(|key| {
            element
                .get_attribute(&format!("data-{}", key))
                .map(|value| (*key, value))
        })
        .collect();

    AppConfig::from_attributes(values.iter().map(|(k, v)| (*k, v.as_str())))
}

/// Write text to the system clipboard.
///
/// Looks `navigator.clipboard.writeText` up dynamically; insecure
/// contexts have no `clipboard` and end up in the error branch.
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let navigator = window().ok_or(JsValue::NULL)?.navigator();
    let clipboard = Reflect::get(&navigator, &"clipboard".into())?;
    let write_text: Function = Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
    let promise: Promise = write_text.call1(&clipboard, &text.into())?.dyn_into()?;
    JsFuture::from(promise).await.map(|_| ())
}
