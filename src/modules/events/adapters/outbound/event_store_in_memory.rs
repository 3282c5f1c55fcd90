// In memory implementation of the EventStore port.
//
// Purpose
// - Back the HTTP service for the lifetime of the process.
// - Support handler tests without any external storage.
//
// Responsibilities
// - Keep events in insertion order.
// - Serialise mutations behind a single lock.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::{EventStore, EventStoreError};

#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

fn not_found(id: &str) -> EventStoreError {
    EventStoreError::NotFound { id: id.to_string() }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn list_all(&self) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.events.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        self.events
            .read()
            .await
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn append(&self, event: Event) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.events.write().await.push(event);
        Ok(())
    }

    async fn replace_by_id(&self, id: &str, changes: Event) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.events.write().await;
        let event = guard
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| not_found(id))?;
        event.apply_changes(changes);
        Ok(event.clone())
    }

    async fn remove_by_id(&self, id: &str) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.events.write().await;
        let index = guard
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| not_found(id))?;
        guard.remove(index);
        Ok(())
    }
}
