//! Main listing component.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{FileTable, SearchBox, StatusBar};
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

/// Page layout around the file table.
#[component]
pub fn Listing() -> impl IntoView {
    view! {
        <main class=css::listing>
            <header class=css::header>
                <h1 class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::FOLDER /></span>
                    {APP_NAME}
                </h1>
                <SearchBox />
            </header>

            <div class=css::body>
                <FileTable />
            </div>

            <StatusBar />
        </main>
    }
}
