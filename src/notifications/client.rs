//! Reconnecting notification client
//!
//! Two states, Disconnected and Connected. After an unexpected close or a
//! failed connect the client waits a fixed delay and tries once more, forever.
//! There is no backoff, jitter or attempt cap. Only [`ClientHandle::disconnect`]
//! stops the loop, including a retry that is already waiting.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::{watch, Notify};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::message::Notification;
use super::transport::{NotificationStream, NotificationTransport};

/// Connection state of the notification socket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// Identifies a registered subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", &self.0.to_string()[..8])
    }
}

type Subscriber = Arc<dyn Fn(&Notification) + Send + Sync>;

struct Shared {
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    state: watch::Sender<ConnectionState>,
    closing: AtomicBool,
    wake: Notify,
}

impl Shared {
    fn subscribers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Subscriber)>> {
        // A panicking subscriber must not take the feed down with it
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_state(&self, state: ConnectionState) {
        let previous = self.state.send_replace(state);
        if previous != state {
            debug!(?state, "connection state changed");
        }
    }

    fn is_closing(&self) -> bool {
        self.closing.load(Ordering::SeqCst)
    }
}

/// Owner-side control of a running client
#[derive(Clone)]
pub struct ClientHandle {
    shared: Arc<Shared>,
}

impl ClientHandle {
    /// Close the connection on purpose; no reconnect follows
    pub fn disconnect(&self) {
        info!("notification socket disconnect requested");
        self.shared.closing.store(true, Ordering::SeqCst);
        self.shared.wake.notify_one();
    }

    /// Current connection state
    pub fn state(&self) -> ConnectionState {
        *self.shared.state.borrow()
    }
}

/// Notification socket client with fixed-delay reconnect
pub struct NotificationClient {
    url: String,
    reconnect_delay: Duration,
    transport: Arc<dyn NotificationTransport>,
    shared: Arc<Shared>,
}

impl NotificationClient {
    /// Create a client; nothing connects until [`run`](Self::run) is awaited
    pub fn new(
        url: impl Into<String>,
        reconnect_delay: Duration,
        transport: Arc<dyn NotificationTransport>,
    ) -> Self {
        let (state, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            url: url.into(),
            reconnect_delay,
            transport,
            shared: Arc::new(Shared {
                subscribers: Mutex::new(Vec::new()),
                state,
                closing: AtomicBool::new(false),
                wake: Notify::new(),
            }),
        }
    }

    /// Register a callback for every parsed notification
    ///
    /// Callbacks run synchronously on the client task, in subscription
    /// order. Each frame goes to the subscribers registered when it arrived,
    /// so a callback may subscribe or unsubscribe without blocking the feed.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.shared.subscribers().push((id, Arc::new(callback)));
        debug!(%id, "subscriber added");
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.shared.subscribers();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != subscribers.len()
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers().len()
    }

    /// Current connection state
    pub fn state(&self) -> ConnectionState {
        *self.shared.state.borrow()
    }

    /// Watch state transitions
    pub fn state_changes(&self) -> watch::Receiver<ConnectionState> {
        self.shared.state.subscribe()
    }

    /// Handle for disconnecting from another task
    pub fn handle(&self) -> ClientHandle {
        ClientHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Close the connection on purpose; no reconnect follows
    pub fn disconnect(&self) {
        self.handle().disconnect();
    }

    /// Connect, deliver messages and reconnect until disconnected
    pub async fn run(&self) {
        loop {
            if self.shared.is_closing() {
                break;
            }

            info!(url = %self.url, "connecting notification socket");
            let attempt = tokio::select! {
                result = self.transport.connect(&self.url) => result,
                _ = self.shared.wake.notified() => break,
            };

            match attempt {
                Ok(mut stream) => {
                    self.shared.set_state(ConnectionState::Connected);
                    info!("notification socket connected");

                    let intentional = self.pump(stream.as_mut()).await;
                    self.shared.set_state(ConnectionState::Disconnected);

                    if intentional {
                        stream.close().await;
                        break;
                    }
                    warn!("notification socket closed unexpectedly");
                }
                Err(e) => warn!(error = %e, "notification socket connect failed"),
            }

            info!(
                delay_secs = self.reconnect_delay.as_secs_f64(),
                "reconnecting after delay"
            );
            tokio::select! {
                _ = tokio::time::sleep(self.reconnect_delay) => {}
                _ = self.shared.wake.notified() => break,
            }
        }

        self.shared.set_state(ConnectionState::Disconnected);
        info!("notification socket stopped");
    }

    /// Read frames until the connection ends; true if we were asked to stop
    async fn pump(&self, stream: &mut dyn NotificationStream) -> bool {
        loop {
            tokio::select! {
                _ = self.shared.wake.notified() => return true,
                frame = stream.next_frame() => match frame {
                    Some(Ok(text)) => self.dispatch(&text),
                    Some(Err(e)) => {
                        warn!(error = %e, "notification socket error");
                        return false;
                    }
                    None => return false,
                },
            }
        }
    }

    fn dispatch(&self, frame: &str) {
        let notification = match Notification::parse(frame) {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "dropping malformed notification frame");
                return;
            }
        };

        let subscribers: Vec<Subscriber> = self
            .shared
            .subscribers()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(&notification);
        }
    }
}

impl fmt::Debug for NotificationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationClient")
            .field("url", &self.url)
            .field("reconnect_delay", &self.reconnect_delay)
            .field("state", &self.state())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
