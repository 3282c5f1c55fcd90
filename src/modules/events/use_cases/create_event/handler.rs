use std::sync::Arc;

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventStore;

pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Appends `event` as-is. Duplicate ids are accepted.
    pub async fn handle(&self, event: Event) -> Result<Event, ApplicationError> {
        match self.event_store.append(event.clone()).await {
            Ok(()) => {
                tracing::info!(event_id = %event.id, "event created");
                Ok(event)
            }
            Err(error) => {
                tracing::warn!(event_id = %event.id, %error, "failed to create event");
                Err(error.into())
            }
        }
    }
}
