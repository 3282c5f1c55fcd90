use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::home::inbound::http as home_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_http::handle))
        .route("/events", get(list_http::handle))
        .route(
            "/events/{id}",
            get(get_http::handle).patch(update_http::handle),
        )
        .route(
            "/event",
            post(create_http::handle).patch(update_http::handle_without_route_id),
        )
        .route(
            "/event/{id}",
            patch(update_http::handle).delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
