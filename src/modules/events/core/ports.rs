// Ports define what the events core needs from storage, without implementing it.
//
// Adapters in `adapters::outbound` implement these traits.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::Event;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventStoreError {
    #[error("event not found: {id}")]
    NotFound { id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Ordered collection of events. Lookups match on `Event::id` and resolve to the
/// first entry in storage order.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Event>, EventStoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Event, EventStoreError>;
    async fn append(&self, event: Event) -> Result<(), EventStoreError>;
    async fn replace_by_id(&self, id: &str, changes: Event) -> Result<Event, EventStoreError>;
    async fn remove_by_id(&self, id: &str) -> Result<(), EventStoreError>;
}
