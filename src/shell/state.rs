use std::sync::Arc;

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::core::ports::EventStore;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn EventStore>,
    pub create_handler: Arc<CreateEventHandler<InMemoryEventStore>>,
    pub update_handler: Arc<UpdateEventHandler<InMemoryEventStore>>,
    pub delete_handler: Arc<DeleteEventHandler<InMemoryEventStore>>,
}

impl AppState {
    /// Wires every use case to the same store instance.
    pub fn new(event_store: Arc<InMemoryEventStore>) -> Self {
        Self {
            queries: event_store.clone(),
            create_handler: Arc::new(CreateEventHandler::new(event_store.clone())),
            update_handler: Arc::new(UpdateEventHandler::new(event_store.clone())),
            delete_handler: Arc::new(DeleteEventHandler::new(event_store)),
        }
    }
}
