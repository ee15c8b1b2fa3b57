//! Locale-aware string comparison for sorting names.
//!
//! In the browser this delegates to `Intl.Collator` with base sensitivity,
//! so `"é"`, `"E"` and `"e"` compare equal and accented names sort next to
//! their unaccented forms. Elsewhere, or when the locale is rejected by the
//! runtime, strings are compared on their base letters: canonical
//! decomposition, combining marks dropped, lowercased.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// A configured string collation.
#[derive(Clone, Debug)]
pub struct Collation {
    #[cfg(target_arch = "wasm32")]
    intl: Option<js_sys::Function>,
}

impl Collation {
    pub fn new(
        #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))] locale: &str,
    ) -> Self {
        #[cfg(target_arch = "wasm32")]
        let intl = {
            let intl = intl_compare(locale);
            if intl.is_none() {
                log::warn!(target: "collate", "Intl.Collator rejected locale {:?}, using base-letter comparison", locale);
            }
            intl
        };

        Self {
            #[cfg(target_arch = "wasm32")]
            intl,
        }
    }

    /// Compare two strings, ignoring case and accents.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        #[cfg(target_arch = "wasm32")]
        if let Some(compare) = &self.intl
            && let Ok(result) = compare.call2(&JsValue::NULL, &a.into(), &b.into())
            && let Some(n) = result.as_f64()
        {
            return n.partial_cmp(&0.0).unwrap_or(Ordering::Equal);
        }

        base_letters(a).cmp(&base_letters(b))
    }
}

/// Reduce a string to lowercase base letters.
pub fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Build the bound `compare` function of an `Intl.Collator`.
///
/// Goes through `Reflect` so an invalid locale surfaces as `None` instead
/// of an uncaught `RangeError`.
#[cfg(target_arch = "wasm32")]
fn intl_compare(locale: &str) -> Option<js_sys::Function> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"sensitivity".into(), &"base".into()).ok()?;

    let intl = js_sys::Reflect::get(&js_sys::global(), &"Intl".into()).ok()?;
    let ctor: js_sys::Function = js_sys::Reflect::get(&intl, &"Collator".into())
        .ok()?
        .dyn_into()
        .ok()?;

    let args = js_sys::Array::of2(&js_sys::Array::of1(&locale.into()), &options);
    let collator: js_sys::Intl::Collator = js_sys::Reflect::construct(&ctor, &args)
        .ok()?
        .unchecked_into();
    Some(collator.compare())
}
