//! SHA-256 reveal and copy control.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::toast;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/listing/table.module.css");

const COPIED_MESSAGE: &str = "SHA-256 copied to clipboard";

/// Button showing the full digest on hover or focus and copying it on click.
///
/// A failed clipboard write shows nothing.
#[component]
pub fn HashButton(digest: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (revealed, set_revealed) = signal(false);

    let preview = format!("SHA-256: {}", digest);

    let on_click = move |_: leptos::ev::MouseEvent| {
        let digest = digest.clone();
        spawn_local(async move {
            match dom::copy_to_clipboard(&digest).await {
                Ok(()) => {
                    set_revealed.set(false);
                    toast::show(ctx, COPIED_MESSAGE);
                }
                Err(e) => log::debug!(target: "clipboard", "Copy failed: {:?}", e),
            }
        });
    };

    view! {
        <div class=css::hashCell>
            <button
                type="button"
                class=css::hashButton
                aria-label="Copy SHA-256 digest"
                on:mouseenter=move |_| set_revealed.set(true)
                on:mouseleave=move |_| set_revealed.set(false)
                on:focus=move |_| set_revealed.set(true)
                on:blur=move |_| set_revealed.set(false)
                on:click=on_click
            >
                "SHA-256"
            </button>
            <Show when=move || revealed.get()>
                <div class=css::hashPreview role="tooltip">{preview.clone()}</div>
            </Show>
        </div>
    }
}
