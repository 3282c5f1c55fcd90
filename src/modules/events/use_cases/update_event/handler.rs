use std::sync::Arc;

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventStore;

pub struct UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Replaces title and description of the event stored under `id`.
    /// `changes.id` is ignored; stored ids never change.
    pub async fn handle(&self, id: &str, changes: Event) -> Result<Event, ApplicationError> {
        match self.event_store.replace_by_id(id, changes).await {
            Ok(updated) => {
                tracing::info!(event_id = %id, "event updated");
                Ok(updated)
            }
            Err(error) => {
                tracing::warn!(event_id = %id, %error, "failed to update event");
                Err(error.into())
            }
        }
    }
}
