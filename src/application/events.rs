//! Explicit event bus for link lifecycle notifications.
//!
//! Subscribers hold an [`EventSubscription`] whose drop ends the
//! subscription; there is no ambient listener registry. The bus itself is a
//! plain value passed by reference (usually inside an `Arc`) to whichever
//! component needs to emit or observe events.

use tokio::sync::broadcast;

/// A link lifecycle event.
#[derive(Debug, Clone)]
pub enum LinkEvent {
    /// A new short link was persisted.
    Created { code: String, short_url: String },
    /// A short code was successfully resolved.
    Resolved { code: String },
}

/// Dispatches [`LinkEvent`]s to current subscribers.
///
/// Built on a broadcast channel: emitting never blocks, and events sent while
/// no subscriber exists are discarded.
pub struct EventBus {
    tx: broadcast::Sender<LinkEvent>,
}

impl EventBus {
    /// Creates a bus buffering up to `capacity` undelivered events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Registers a new subscriber.
    ///
    /// The subscription ends when the returned value is dropped.
    pub fn subscribe(&self) -> EventSubscription {
        EventSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Emits an event to all current subscribers.
    ///
    /// Returns the number of subscribers the event was delivered to.
    pub fn emit(&self, event: LinkEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

/// A live subscription to an [`EventBus`].
pub struct EventSubscription {
    rx: broadcast::Receiver<LinkEvent>,
}

impl EventSubscription {
    /// Receives the next event, or `None` once the bus is gone.
    ///
    /// A subscriber that falls behind skips the overwritten events and keeps
    /// receiving from the oldest retained one.
    pub async fn recv(&mut self) -> Option<LinkEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("event subscriber lagged, skipped {skipped} events");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_reaches_subscriber() {
        let bus = EventBus::new(8);
        let mut sub = bus.subscribe();

        let delivered = bus.emit(LinkEvent::Resolved {
            code: "abc123".to_string(),
        });
        assert_eq!(delivered, 1);

        match sub.recv().await {
            Some(LinkEvent::Resolved { code }) => assert_eq!(code, "abc123"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_is_discarded() {
        let bus = EventBus::new(8);

        let delivered = bus.emit(LinkEvent::Resolved {
            code: "nobody".to_string(),
        });
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn test_drop_ends_subscription() {
        let bus = EventBus::new(8);

        let sub = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_each_receive() {
        let bus = EventBus::new(8);
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        let delivered = bus.emit(LinkEvent::Created {
            code: "xy12ab".to_string(),
            short_url: "https://neo.link/xy12ab".to_string(),
        });
        assert_eq!(delivered, 2);

        assert!(matches!(first.recv().await, Some(LinkEvent::Created { .. })));
        assert!(matches!(second.recv().await, Some(LinkEvent::Created { .. })));
    }
}
