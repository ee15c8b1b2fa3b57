//! Browser implementations of the live-update [`Transport`] and [`Timer`].

use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, EventSource, MessageEvent};

use super::error::ChannelError;
use super::live::{ChannelEvent, Timer, Transport};

/// Check whether the runtime provides `EventSource`.
pub fn event_source_supported() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &"EventSource".into()).unwrap_or(false)
}

/// Server-sent events over `EventSource`.
///
/// Handler closures live as long as the subscription they belong to and
/// are dropped on [`Transport::close`].
#[derive(Default)]
pub struct EventSourceTransport {
    source: Option<EventSource>,
    on_open: Option<Closure<dyn FnMut(Event)>>,
    on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
    on_error: Option<Closure<dyn FnMut(Event)>>,
}

impl EventSourceTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for EventSourceTransport {
    fn open(
        &mut self,
        url: &str,
        events: UnboundedSender<ChannelEvent>,
    ) -> Result<(), ChannelError> {
        self.close();

        let source = EventSource::new(url).map_err(|e| {
            ChannelError::OpenFailed(e.as_string().unwrap_or_else(|| "unknown error".to_string()))
        })?;

        let tx = events.clone();
        let on_open = Closure::wrap(Box::new(move |_: Event| {
            let _ = tx.unbounded_send(ChannelEvent::Opened);
        }) as Box<dyn FnMut(Event)>);

        let tx = events.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Some(data) = event.data().as_string() {
                let _ = tx.unbounded_send(ChannelEvent::Message(data));
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        let tx = events;
        let on_error = Closure::wrap(Box::new(move |_: Event| {
            let _ = tx.unbounded_send(ChannelEvent::Error);
        }) as Box<dyn FnMut(Event)>);

        source.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        self.source = Some(source);
        self.on_open = Some(on_open);
        self.on_message = Some(on_message);
        self.on_error = Some(on_error);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(source) = self.source.take() {
            source.set_onopen(None);
            source.set_onmessage(None);
            source.set_onerror(None);
            source.close();
        }
        self.on_open = None;
        self.on_message = None;
        self.on_error = None;
    }
}

/// `setTimeout`-backed delays.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        gloo_timers::future::TimeoutFuture::new(ms)
    }
}
