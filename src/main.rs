use filedrop::app::App;
use filedrop::utils::{dom, logger};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let element = dom::mount_element();
    let (config, errors) = dom::read_config(element.as_ref());

    logger::init(config.log_level);
    for e in errors {
        log::warn!(target: "config", "{}", e);
    }

    let root = element
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App config=config.clone() /> }).forget();
}
