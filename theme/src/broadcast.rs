//! Theme change announcements.
//!
//! Subscribers register a callback and receive every [`ThemeChanged`] emitted
//! while they are registered. Delivery is synchronous and in registration
//! order.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

use serde::Serialize;

use crate::model::Theme;

/// Payload delivered to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeChanged {
    pub theme: Theme,
}

impl ThemeChanged {
    /// JSON form used as a DOM event detail: `{"theme":"dark"}`.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Handle returned by [`Broadcast::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn(&ThemeChanged)>;

/// Registry of theme change subscribers.
#[derive(Default)]
pub struct Broadcast {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl Broadcast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl Fn(&ThemeChanged) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn emit(&self, event: &ThemeChanged) {
        for (_, callback) in &self.subscribers {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Broadcast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcast")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
