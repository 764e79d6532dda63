//! Invalidation bus for cart-derived views.
//!
//! After a successful mutation the data layer publishes the affected topic;
//! any rendering or caching layer subscribes independently and refetches
//! what it tagged with that topic. Publishing is fire-and-forget: a send
//! with zero subscribers is not an error, and no publisher ever awaits a
//! consumer.

use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 16;

/// A named group of views that share a staleness boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Cart contents and anything derived from them (badges, totals).
    Cart,
    /// Product listings.
    Products,
    /// Category listings.
    Collections,
    /// Static content pages.
    Pages,
}

impl Topic {
    /// Stable string tag for subscribers that key off names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Products => "products",
            Self::Collections => "collections",
            Self::Pages => "pages",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broadcast bus carrying [`Topic`] invalidation events.
///
/// Cheaply cloneable; all clones publish into the same channel. Slow
/// subscribers that fall more than the channel capacity behind lose the
/// oldest events, which is acceptable for invalidation - a missed event at
/// worst means one extra refetch cycle later.
#[derive(Debug, Clone)]
pub struct InvalidationBus {
    tx: broadcast::Sender<Topic>,
}

impl InvalidationBus {
    /// Create a bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an invalidation event.
    ///
    /// Returns the number of subscribers that received it; zero subscribers
    /// is a normal outcome, not a failure.
    pub fn publish(&self, topic: Topic) -> usize {
        // broadcast::send errs only when there are no receivers
        self.tx.send(topic).unwrap_or(0)
    }

    /// Subscribe to invalidation events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Topic> {
        self.tx.subscribe()
    }
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_tags() {
        assert_eq!(Topic::Cart.as_str(), "cart");
        assert_eq!(Topic::Products.to_string(), "products");
    }

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let bus = InvalidationBus::default();
        assert_eq!(bus.publish(Topic::Cart), 0);
    }

    #[tokio::test]
    async fn test_subscribers_receive_published_topics() {
        let bus = InvalidationBus::default();
        let mut rx = bus.subscribe();

        assert_eq!(bus.publish(Topic::Cart), 1);
        assert_eq!(rx.recv().await.unwrap(), Topic::Cart);
    }

    #[tokio::test]
    async fn test_clones_share_the_channel() {
        let bus = InvalidationBus::default();
        let mut rx = bus.subscribe();

        bus.clone().publish(Topic::Collections);
        assert_eq!(rx.recv().await.unwrap(), Topic::Collections);
    }
}
