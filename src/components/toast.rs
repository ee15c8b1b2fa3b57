//! Transient confirmation notice.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TOAST_DURATION_MS;

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// The toast currently on screen, if any.
///
/// Every shown toast gets a fresh sequence number so a dismissal timer
/// only removes the toast it was started for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    seq: u64,
    current: Option<(u64, String)>,
}

impl ToastState {
    /// Show `message`, replacing any visible toast. Returns its id.
    pub fn push(&mut self, message: String) -> u64 {
        self.seq += 1;
        self.current = Some((self.seq, message));
        self.seq
    }

    /// Remove the toast with `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|(current, _)| *current == id) {
            self.current = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, m)| m.as_str())
    }
}

/// Show a toast and dismiss it after [`TOAST_DURATION_MS`].
pub fn show(ctx: AppContext, message: impl Into<String>) {
    let message = message.into();
    let id = ctx.toast.try_update(|t| t.push(message)).unwrap_or_default();

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        ctx.toast.update(|t| t.dismiss(id));
    });
}

/// Renders the visible toast at the bottom of the page.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let message = Memo::new(move |_| ctx.toast.with(|t| t.message().map(str::to_string)));

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=css::toast role="status" aria-live="polite">
                <span class=css::icon><Icon icon=ic::COPIED /></span>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut state = ToastState::default();
        let id = state.push("copied".into());
        assert_eq!(state.message(), Some("copied"));
        state.dismiss(id);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn test_stale_timer_keeps_newer_toast() {
        let mut state = ToastState::default();
        let first = state.push("one".into());
        let second = state.push("two".into());
        state.dismiss(first);
        assert_eq!(state.message(), Some("two"));
        state.dismiss(second);
        assert_eq!(state.message(), None);
    }
}
