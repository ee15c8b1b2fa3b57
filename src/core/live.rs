//! Live-update channel: keeps the listing fresh.
//!
//! The channel is an explicit state machine ([`LiveChannel`]) fed with
//! transport events, plus an async driver ([`run_channel`]) that owns the
//! transport and the reconnect timer. When the runtime has no event-stream
//! transport at all, [`run_polling`] refreshes on a fixed interval instead.
//!
//! ## Transitions
//!
//! | State          | Event              | Next           | Effect                     |
//! |----------------|--------------------|----------------|----------------------------|
//! | any            | `connect()`        | `Connecting`   | open subscription          |
//! | `Connecting`   | `Opened`           | `Connected`    | reset backoff              |
//! | `Connected`    | `Message("update")`| `Connected`    | one fetch                  |
//! | `Connecting`/`Connected` | `Error`  | `Disconnected` | close, reconnect after delay, double delay |
//! | `Disconnected` | anything           | `Disconnected` | none (reconnect pending)   |

use std::future::Future;

use futures::StreamExt;
use futures::channel::mpsc::{self, UnboundedSender};

use super::error::ChannelError;
use crate::config::{UPDATE_EVENT, backoff};
use crate::models::ConnectionState;

// ============================================================================
// Events and effects
// ============================================================================

/// Something the transport observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelEvent {
    /// Subscription established.
    Opened,
    /// A message with the given payload.
    Message(String),
    /// Transport error; the subscription is no longer usable.
    Error,
}

/// Something the driver must do in response to a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Open a new subscription.
    Open,
    /// Re-fetch the listing.
    Fetch,
    /// Close the subscription and connect again after a delay.
    Reconnect { after_ms: u32 },
}

// ============================================================================
// Backoff
// ============================================================================

/// Doubling reconnect delay with a ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Backoff {
    initial_ms: u32,
    max_ms: u32,
    current_ms: u32,
}

impl Backoff {
    pub fn new(initial_ms: u32, max_ms: u32) -> Self {
        Self {
            initial_ms,
            max_ms,
            current_ms: initial_ms,
        }
    }

    /// Delay for the next reconnect. Doubles the following one.
    pub fn next_delay(&mut self) -> u32 {
        let delay = self.current_ms;
        self.current_ms = self.current_ms.saturating_mul(2).min(self.max_ms);
        delay
    }

    pub fn reset(&mut self) {
        self.current_ms = self.initial_ms;
    }

    pub fn current(&self) -> u32 {
        self.current_ms
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(backoff::INITIAL_MS, backoff::MAX_MS)
    }
}

// ============================================================================
// LiveChannel
// ============================================================================

/// Subscription state machine with exponential reconnect backoff.
///
/// There is no terminal state: errors always lead to another attempt.
#[derive(Clone, Debug, Default)]
pub struct LiveChannel {
    state: ConnectionState,
    backoff: Backoff,
}

impl LiveChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn backoff(&self) -> &Backoff {
        &self.backoff
    }

    /// Start a connection attempt.
    pub fn connect(&mut self) -> Effect {
        self.state = ConnectionState::Connecting;
        Effect::Open
    }

    /// Apply a transport event.
    pub fn handle(&mut self, event: ChannelEvent) -> Option<Effect> {
        match (self.state, event) {
            (ConnectionState::Connecting | ConnectionState::Connected, ChannelEvent::Opened) => {
                self.state = ConnectionState::Connected;
                self.backoff.reset();
                None
            }
            (ConnectionState::Connected, ChannelEvent::Message(data)) => {
                (data == UPDATE_EVENT).then_some(Effect::Fetch)
            }
            (ConnectionState::Connecting | ConnectionState::Connected, ChannelEvent::Error) => {
                self.state = ConnectionState::Disconnected;
                Some(Effect::Reconnect {
                    after_ms: self.backoff.next_delay(),
                })
            }
            _ => None,
        }
    }
}

// ============================================================================
// Driver
// ============================================================================

/// A push-notification transport (e.g. `EventSource`).
pub trait Transport {
    /// Open a subscription to `url`, reporting events into `events`.
    ///
    /// Dropping `events` without sending [`ChannelEvent::Error`] also
    /// counts as a transport error.
    fn open(&mut self, url: &str, events: UnboundedSender<ChannelEvent>)
    -> Result<(), ChannelError>;

    /// Tear down the current subscription, if any.
    fn close(&mut self);
}

/// A non-blocking delay.
pub trait Timer {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Hooks the driver reports to.
pub trait ChannelObserver {
    /// The channel moved to a new state.
    fn state_changed(&mut self, state: ConnectionState);
    /// An update notice arrived; the listing should be re-fetched.
    fn update(&mut self);
}

/// Drive a [`LiveChannel`] over `transport`, forever.
///
/// Each update notice triggers exactly one [`ChannelObserver::update`];
/// notices are neither queued nor coalesced.
pub async fn run_channel<T, S, O>(
    mut channel: LiveChannel,
    mut transport: T,
    timer: S,
    url: &str,
    observer: &mut O,
) where
    T: Transport,
    S: Timer,
    O: ChannelObserver,
{
    loop {
        channel.connect();
        observer.state_changed(channel.state());
        log::debug!(target: "live", "Connecting to {}", url);

        let (tx, mut rx) = mpsc::unbounded();
        if let Err(e) = transport.open(url, tx) {
            log::error!(target: "live", "{}", e);
        }

        let delay = loop {
            let before = channel.state();
            let event = rx.next().await.unwrap_or(ChannelEvent::Error);
            let effect = channel.handle(event);

            if channel.state() != before {
                observer.state_changed(channel.state());
                if channel.state() == ConnectionState::Connected {
                    log::info!(target: "live", "Connected");
                }
            }

            match effect {
                Some(Effect::Fetch) => {
                    log::info!(target: "live", "Update received");
                    observer.update();
                }
                Some(Effect::Reconnect { after_ms }) => break after_ms,
                Some(Effect::Open) | None => {}
            }
        };

        log::warn!(target: "live", "Connection lost, retrying in {} ms", delay);
        transport.close();
        timer.sleep(delay).await;
    }
}

/// Refresh every `interval_ms`, forever. No backoff.
pub async fn run_polling<S, F>(timer: S, interval_ms: u32, mut on_tick: F)
where
    S: Timer,
    F: FnMut(),
{
    log::debug!(target: "live", "Polling every {} ms", interval_ms);
    loop {
        timer.sleep(interval_ms).await;
        on_tick();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use futures::executor::LocalPool;
    use futures::future::{self, Either};
    use futures::task::LocalSpawnExt;

    use super::*;

    // ------------------------------------------------------------------
    // State machine
    // ------------------------------------------------------------------

    fn connected() -> LiveChannel {
        let mut channel = LiveChannel::new();
        channel.connect();
        channel.handle(ChannelEvent::Opened);
        channel
    }

    #[test]
    fn test_connect_enters_connecting() {
        let mut channel = LiveChannel::new();
        assert_eq!(channel.state(), ConnectionState::Disconnected);
        assert_eq!(channel.connect(), Effect::Open);
        assert_eq!(channel.state(), ConnectionState::Connecting);
        assert_eq!(channel.backoff().current(), 3000);
    }

    #[test]
    fn test_update_while_connected_fetches_once() {
        let mut channel = connected();
        assert_eq!(channel.state(), ConnectionState::Connected);
        assert_eq!(
            channel.handle(ChannelEvent::Message("update".into())),
            Some(Effect::Fetch)
        );
        assert_eq!(channel.handle(ChannelEvent::Message("ping".into())), None);
    }

    #[test]
    fn test_update_before_open_is_ignored() {
        let mut channel = LiveChannel::new();
        channel.connect();
        assert_eq!(channel.handle(ChannelEvent::Message("update".into())), None);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let mut channel = LiveChannel::new();
        let delays: Vec<u32> = (0..7)
            .map(|_| {
                channel.connect();
                match channel.handle(ChannelEvent::Error) {
                    Some(Effect::Reconnect { after_ms }) => after_ms,
                    other => panic!("unexpected effect {:?}", other),
                }
            })
            .collect();
        assert_eq!(delays, [3000, 6000, 12000, 24000, 30000, 30000, 30000]);
        for (n, delay) in delays.iter().enumerate() {
            assert_eq!(*delay, 30000.min(3000 * 2u32.pow(n as u32)));
        }
    }

    #[test]
    fn test_successful_open_resets_backoff() {
        let mut channel = LiveChannel::new();
        for _ in 0..3 {
            channel.connect();
            channel.handle(ChannelEvent::Error);
        }
        channel.connect();
        channel.handle(ChannelEvent::Opened);
        assert_eq!(
            channel.handle(ChannelEvent::Error),
            Some(Effect::Reconnect { after_ms: 3000 })
        );
    }

    #[test]
    fn test_error_while_reconnect_pending_is_ignored() {
        let mut channel = connected();
        channel.handle(ChannelEvent::Error);
        assert_eq!(channel.state(), ConnectionState::Disconnected);
        assert_eq!(channel.handle(ChannelEvent::Error), None);
        assert_eq!(channel.backoff().current(), 6000);
    }

    // ------------------------------------------------------------------
    // Driver
    // ------------------------------------------------------------------

    enum Attempt {
        /// Open succeeds; the events are delivered and the stream stays open.
        Events(Vec<ChannelEvent>),
        /// Open succeeds; the events are delivered, then the stream ends.
        Hangup(Vec<ChannelEvent>),
        /// Open fails synchronously.
        Fail,
    }

    #[derive(Default)]
    struct Log {
        opens: usize,
        closes: usize,
        sleeps: Vec<u32>,
        fetches: usize,
        states: Vec<ConnectionState>,
    }

    struct ScriptedTransport {
        attempts: VecDeque<Attempt>,
        held: Vec<UnboundedSender<ChannelEvent>>,
        log: Rc<RefCell<Log>>,
    }

    impl Transport for ScriptedTransport {
        fn open(
            &mut self,
            _url: &str,
            events: UnboundedSender<ChannelEvent>,
        ) -> Result<(), ChannelError> {
            self.log.borrow_mut().opens += 1;
            match self.attempts.pop_front() {
                Some(Attempt::Events(list)) => {
                    for event in list {
                        events.unbounded_send(event).unwrap();
                    }
                    self.held.push(events);
                }
                Some(Attempt::Hangup(list)) => {
                    for event in list {
                        events.unbounded_send(event).unwrap();
                    }
                }
                Some(Attempt::Fail) => return Err(ChannelError::OpenFailed("refused".into())),
                // Script exhausted: stay open and silent.
                None => self.held.push(events),
            }
            Ok(())
        }

        fn close(&mut self) {
            self.log.borrow_mut().closes += 1;
        }
    }

    struct RecordingTimer {
        log: Rc<RefCell<Log>>,
    }

    impl Timer for RecordingTimer {
        fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
            self.log.borrow_mut().sleeps.push(ms);
            future::ready(())
        }
    }

    struct Recorder {
        log: Rc<RefCell<Log>>,
    }

    impl ChannelObserver for Recorder {
        fn state_changed(&mut self, state: ConnectionState) {
            self.log.borrow_mut().states.push(state);
        }

        fn update(&mut self) {
            self.log.borrow_mut().fetches += 1;
        }
    }

    fn drive(attempts: Vec<Attempt>) -> Rc<RefCell<Log>> {
        let log = Rc::new(RefCell::new(Log::default()));
        let transport = ScriptedTransport {
            attempts: attempts.into(),
            held: Vec::new(),
            log: log.clone(),
        };
        let timer = RecordingTimer { log: log.clone() };
        let mut observer = Recorder { log: log.clone() };

        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(async move {
                run_channel(LiveChannel::new(), transport, timer, "/events", &mut observer).await;
            })
            .unwrap();
        pool.run_until_stalled();
        log
    }

    #[test]
    fn test_driver_update_triggers_exactly_one_fetch() {
        let log = drive(vec![Attempt::Events(vec![
            ChannelEvent::Opened,
            ChannelEvent::Message("update".into()),
        ])]);
        let log = log.borrow();
        assert_eq!(log.fetches, 1);
        assert_eq!(log.opens, 1);
        assert!(log.sleeps.is_empty());
        assert_eq!(
            log.states,
            [ConnectionState::Connecting, ConnectionState::Connected]
        );
    }

    #[test]
    fn test_driver_each_notice_fetches() {
        let log = drive(vec![Attempt::Events(vec![
            ChannelEvent::Opened,
            ChannelEvent::Message("update".into()),
            ChannelEvent::Message("heartbeat".into()),
            ChannelEvent::Message("update".into()),
        ])]);
        assert_eq!(log.borrow().fetches, 2);
    }

    #[test]
    fn test_driver_backoff_sequence_and_reset() {
        let log = drive(vec![
            Attempt::Events(vec![ChannelEvent::Error]),
            Attempt::Events(vec![ChannelEvent::Error]),
            Attempt::Events(vec![ChannelEvent::Error]),
            Attempt::Events(vec![ChannelEvent::Opened, ChannelEvent::Error]),
            Attempt::Events(vec![ChannelEvent::Error]),
        ]);
        let log = log.borrow();
        assert_eq!(log.sleeps, [3000, 6000, 12000, 3000, 6000]);
        assert_eq!(log.closes, 5);
        assert_eq!(log.opens, 6);
    }

    #[test]
    fn test_driver_open_failure_and_hangup_count_as_errors() {
        let log = drive(vec![
            Attempt::Fail,
            Attempt::Hangup(vec![ChannelEvent::Opened]),
            Attempt::Hangup(vec![]),
        ]);
        let log = log.borrow();
        assert_eq!(log.sleeps, [3000, 3000, 6000]);
        assert_eq!(log.opens, 4);
        assert_eq!(log.fetches, 0);
    }

    // ------------------------------------------------------------------
    // Polling
    // ------------------------------------------------------------------

    struct LimitedTimer {
        remaining: Rc<RefCell<usize>>,
        sleeps: Rc<RefCell<Vec<u32>>>,
    }

    impl Timer for LimitedTimer {
        fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
            self.sleeps.borrow_mut().push(ms);
            let mut remaining = self.remaining.borrow_mut();
            if *remaining == 0 {
                Either::Left(future::pending::<()>())
            } else {
                *remaining -= 1;
                Either::Right(future::ready(()))
            }
        }
    }

    #[test]
    fn test_polling_is_fixed_interval() {
        let ticks = Rc::new(RefCell::new(0usize));
        let sleeps = Rc::new(RefCell::new(Vec::new()));
        let timer = LimitedTimer {
            remaining: Rc::new(RefCell::new(4)),
            sleeps: sleeps.clone(),
        };

        let mut pool = LocalPool::new();
        let counter = ticks.clone();
        pool.spawner()
            .spawn_local(run_polling(timer, 5000, move || *counter.borrow_mut() += 1))
            .unwrap();
        pool.run_until_stalled();

        assert_eq!(*ticks.borrow(), 4);
        assert_eq!(*sleeps.borrow(), [5000; 5]);
    }
}
