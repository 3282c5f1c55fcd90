use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::core::event::{Event, EventBodyError};
use crate::shell::state::AppState;

/// `PATCH /event/{id}`: the route id selects the event, the body carries the new fields.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    match Event::from_json_body(&body) {
        Ok(changes) => update(&state, &id, changes).await,
        Err(error) => bad_request(error),
    }
}

/// `PATCH /event`: no route id, so the body's `ID` selects the event.
pub async fn handle_without_route_id(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    match Event::from_json_body(&body) {
        Ok(changes) => {
            let id = changes.id.clone();
            update(&state, &id, changes).await
        }
        Err(error) => bad_request(error),
    }
}

async fn update(state: &AppState, id: &str, changes: Event) -> Response {
    match state.update_handler.handle(id, changes).await {
        Ok(updated) => Json(updated).into_response(),
        Err(ApplicationError::NotFound { id }) => {
            (StatusCode::NOT_FOUND, format!("No event with ID {id}")).into_response()
        }
        Err(ApplicationError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

fn bad_request(error: EventBodyError) -> Response {
    tracing::debug!(%error, "rejected update event body");
    (
        StatusCode::BAD_REQUEST,
        "Kindly enter data with the event title and description only in order to update",
    )
        .into_response()
}
