use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.delete_handler.handle(&id).await {
        Ok(()) => (
            StatusCode::OK,
            format!("The event with ID {id} has been deleted successfully"),
        )
            .into_response(),
        Err(ApplicationError::NotFound { id }) => {
            (StatusCode::NOT_FOUND, format!("No event with ID {id}")).into_response()
        }
        Err(ApplicationError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
