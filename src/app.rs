//! Root application module.
//!
//! Contains the main App component and the AppContext shared by every
//! component, following Leptos conventions.

use leptos::prelude::*;

use crate::components::Listing;
use crate::components::toast::{ToastHost, ToastState};
use crate::config::AppConfig;
use crate::core::{Collation, ListingState};
use crate::models::{FileRecord, SyncStatus};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child
/// with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Listing**: the last fetched files and the active sort. Only ever
///   replaced or re-sorted, never patched.
/// - **Search**: current search box value.
/// - **Sync**: live-update connection state and last refresh outcome.
/// - **Toast**: transient confirmation message.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub listing: RwSignal<ListingState>,
    pub search: RwSignal<String>,
    pub sync: RwSignal<SyncStatus>,
    pub toast: RwSignal<ToastState>,
    pub config: StoredValue<AppConfig>,
    /// Name collation for the configured locale. Holds a JS function in
    /// the browser, hence local storage.
    pub collation: StoredValue<Collation, LocalStorage>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let collation = Collation::new(&config.locale);
        Self {
            listing: RwSignal::new(ListingState::default()),
            search: RwSignal::new(String::new()),
            sync: RwSignal::new(SyncStatus::default()),
            toast: RwSignal::new(ToastState::default()),
            config: StoredValue::new(config),
            collation: StoredValue::new_local(collation),
        }
    }

    /// Files to display: held listing sorted by the active sort, then
    /// narrowed by the search box.
    pub fn visible_files(&self) -> Vec<FileRecord> {
        let query = self.search.get();
        self.listing
            .with(|listing| self.collation.with_value(|c| listing.visible(&query, c)))
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the AppContext
/// - Starts the initial fetch and the live-update channel
/// - Renders the listing and the toast host
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    #[cfg(target_arch = "wasm32")]
    crate::core::sync::start(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Listing />
        </ErrorBoundary>
        <ToastHost />
    }
}
