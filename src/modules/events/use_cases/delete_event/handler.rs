use std::sync::Arc;

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::core::ports::EventStore;

pub struct DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, id: &str) -> Result<(), ApplicationError> {
        match self.event_store.remove_by_id(id).await {
            Ok(()) => {
                tracing::info!(event_id = %id, "event deleted");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(event_id = %id, %error, "failed to delete event");
                Err(error.into())
            }
        }
    }
}
