//! Fetch cycle and live-update wiring.
//!
//! A fetch cycle replaces the held listing wholesale; sorting, filtering
//! and rendering follow reactively from the new [`ListingState`]. Cycles
//! are not serialized: if two overlap, the last response to arrive wins.
//!
//! [`ListingState`]: super::ListingState

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use super::live::ChannelObserver;
use super::error::FetchError;
use super::listing::ListingState;
use crate::app::AppContext;
#[cfg(target_arch = "wasm32")]
use crate::models::ConnectionState;
use crate::models::{FileRecord, SyncStatus};
use crate::utils::fetch_json;
use crate::utils::format::clock_now;

/// Fetch the listing once and publish it.
///
/// Nothing is retried here. The next trigger (update notice or poll tick)
/// is the retry.
pub async fn refresh(ctx: AppContext) {
    let url = ctx.config.with_value(|c| c.listing_url.clone());
    let result = fetch_json::<Vec<FileRecord>>(&url).await;

    let mut status = ctx.sync.get_untracked();
    ctx.listing
        .maybe_update(|listing| apply_fetch(listing, &mut status, result, clock_now()));
    ctx.sync.set(status);
}

/// Fold one fetch outcome into the held state.
///
/// On success the listing is replaced wholesale, keeping the active sort,
/// and the error is cleared. On failure the listing is left as it was and
/// the error is recorded. Returns whether the listing changed.
pub fn apply_fetch(
    listing: &mut ListingState,
    status: &mut SyncStatus,
    result: Result<Vec<FileRecord>, FetchError>,
    now: String,
) -> bool {
    match result {
        Ok(files) => {
            log::debug!(target: "fetch", "Fetched {} files", files.len());
            for file in files.iter().filter(|f| !f.has_valid_digest()) {
                log::warn!(target: "fetch", "{}: digest is not 64 hex characters", file.name);
            }
            listing.replace(files);
            status.last_refresh = Some(now);
            status.last_error = None;
            true
        }
        Err(e) => {
            log::error!(target: "fetch", "Listing fetch failed: {}", e);
            status.last_error = Some(e.to_string());
            false
        }
    }
}

/// Start a fetch cycle in the background.
pub fn spawn_refresh(ctx: AppContext) {
    spawn_local(refresh(ctx));
}

/// Reports channel activity into the [`AppContext`].
#[cfg(target_arch = "wasm32")]
struct ContextObserver {
    ctx: AppContext,
}

#[cfg(target_arch = "wasm32")]
impl ChannelObserver for ContextObserver {
    fn state_changed(&mut self, state: ConnectionState) {
        self.ctx.sync.update(|status| status.connection = state);
    }

    fn update(&mut self) {
        spawn_refresh(self.ctx);
    }
}

/// Load the listing and keep it live for the lifetime of the page.
///
/// Uses server-sent events when the runtime supports them, otherwise
/// polls at the configured interval.
#[cfg(target_arch = "wasm32")]
pub fn start(ctx: AppContext) {
    use super::error::ChannelError;
    use super::live::{LiveChannel, run_channel, run_polling};
    use super::transport::{BrowserTimer, EventSourceTransport, event_source_supported};

    spawn_refresh(ctx);

    let (events_url, poll_ms) = ctx
        .config
        .with_value(|c| (c.events_url.clone(), c.poll_interval_ms));

    if event_source_supported() {
        spawn_local(async move {
            let mut observer = ContextObserver { ctx };
            run_channel(
                LiveChannel::new(),
                EventSourceTransport::new(),
                BrowserTimer,
                &events_url,
                &mut observer,
            )
            .await;
        });
    } else {
        log::warn!(target: "live", "{}, polling every {} ms", ChannelError::Unsupported, poll_ms);
        ctx.sync
            .update(|status| status.connection = ConnectionState::Polling);
        spawn_local(run_polling(BrowserTimer, poll_ms, move || {
            spawn_refresh(ctx)
        }));
    }
}
