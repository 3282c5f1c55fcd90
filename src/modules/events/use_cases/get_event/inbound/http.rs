use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::core::ports::EventStoreError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.queries.find_by_id(&id).await {
        Ok(event) => Json(event).into_response(),
        Err(EventStoreError::NotFound { id }) => {
            (StatusCode::NOT_FOUND, format!("No event with ID {id}")).into_response()
        }
        Err(error) => {
            tracing::error!(event_id = %id, %error, "failed to fetch event");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
