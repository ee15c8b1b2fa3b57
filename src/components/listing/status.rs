//! Status bar component.
//!
//! Shows how the listing is kept fresh (live, polling, reconnecting), the
//! number of files on screen, and when the last successful refresh was.
//! Fetch failures only mark the refresh time as stale; details go to the
//! console.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ConnectionState;

stylance::import_crate_style!(css, "src/components/listing/status.module.css");

fn connection_icon(state: ConnectionState) -> IconData {
    match state {
        ConnectionState::Connected => ic::LIVE,
        ConnectionState::Polling => ic::POLLING,
        ConnectionState::Connecting | ConnectionState::Disconnected => ic::OFFLINE,
    }
}

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let connection = Memo::new(move |_| ctx.sync.with(|s| s.connection));
    let refreshed = Memo::new(move |_| ctx.sync.with(|s| s.last_refresh.clone()));
    let stale = Memo::new(move |_| ctx.sync.with(|s| s.last_error.is_some()));
    let counts = Memo::new(move |_| {
        let total = ctx.listing.with(|l| l.files().len());
        let shown = if ctx.search.with(String::is_empty) {
            total
        } else {
            ctx.visible_files().len()
        };
        (shown, total)
    });

    let badge_class = move || match connection.get() {
        ConnectionState::Connected => format!("{} {}", css::badge, css::badgeLive),
        ConnectionState::Polling => format!("{} {}", css::badge, css::badgePolling),
        _ => format!("{} {}", css::badge, css::badgeOffline),
    };

    view! {
        <footer class=css::bar>
            <span class=badge_class>
                <span class=css::badgeIcon>
                    {move || view! { <Icon icon=connection_icon(connection.get()) /> }}
                </span>
                {move || connection.get().label()}
            </span>

            <span class=css::count>
                {move || match counts.get() {
                    (shown, total) if shown == total => format!("{} files", total),
                    (shown, total) => format!("{} of {} files", shown, total),
                }}
            </span>

            <span class=move || {
                if stale.get() {
                    format!("{} {}", css::refreshed, css::stale)
                } else {
                    css::refreshed.to_string()
                }
            }>
                {move || refreshed.get().map(|t| format!("Updated {}", t)).unwrap_or_default()}
            </span>
        </footer>
    }
}
