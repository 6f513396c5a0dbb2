//! Notification socket
//!
//! A long-lived connection to the server's notification feed that fans
//! parsed messages out to subscribers and reconnects on a fixed delay.

pub mod client;
pub mod message;
pub mod transport;

pub use client::{ClientHandle, ConnectionState, NotificationClient, SubscriptionId};
pub use message::Notification;
pub use transport::{NotificationStream, NotificationTransport, WsTransport};
