use thiserror::Error;

use crate::modules::events::core::ports::EventStoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("no event with ID {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Store(EventStoreError),
}

impl From<EventStoreError> for ApplicationError {
    fn from(error: EventStoreError) -> Self {
        match error {
            EventStoreError::NotFound { id } => ApplicationError::NotFound { id },
            other => ApplicationError::Store(other),
        }
    }
}
