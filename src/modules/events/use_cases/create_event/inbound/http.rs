use axum::{
    Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse,
};

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let event = match Event::from_json_body(&body) {
        Ok(event) => event,
        Err(error) => {
            tracing::debug!(%error, "rejected create event body");
            return (
                StatusCode::BAD_REQUEST,
                "Kindly enter data with the event title and description only in order to create",
            )
                .into_response();
        }
    };

    match state.create_handler.handle(event).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
