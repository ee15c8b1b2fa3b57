use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

/// Free-text filter on file names. Filtering reuses the held listing.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <label class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                id="fileSearch"
                class=css::searchInput
                type="search"
                placeholder="Search files"
                aria-label="Search files by name"
                autocomplete="off"
                prop:value=move || ctx.search.get()
                on:input=move |ev| ctx.search.set(event_target_value(&ev))
            />
        </label>
    }
}
