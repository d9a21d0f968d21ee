use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::content::section::SectionKey;

/// Events emitted after snapshot changes, consumed by rendering layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentEvent {
    /// The store finished its initial load (successfully or not).
    Ready,
    /// One section was replaced by a local edit.
    SectionChanged {
        section: SectionKey,
        changed_at: DateTime<Utc>,
    },
    /// The whole snapshot was replaced (remote push, reset, rollback).
    DocumentReplaced { changed_at: DateTime<Utc> },
}

/// In-process change bus backed by `tokio::broadcast`.
#[derive(Debug, Clone)]
pub struct ContentBus {
    sender: Arc<broadcast::Sender<ContentEvent>>,
}

impl ContentBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Publish an event to all current subscribers. Lack of subscribers is
    /// not an error; public pages may run without any listener.
    pub fn publish(&self, event: ContentEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ContentBus {
    fn default() -> Self {
        Self::new(64)
    }
}
