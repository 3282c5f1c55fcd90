use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use events_api::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use events_api::modules::events::core::event::Event;
use events_api::shell::config::Config;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "events_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let event_store = if config.seed {
        InMemoryEventStore::with_events(vec![introductory_event()])
    } else {
        InMemoryEventStore::new()
    };
    let app = router(AppState::new(Arc::new(event_store)));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(address.as_str()).await?;
    tracing::info!("events API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn introductory_event() -> Event {
    Event::new(
        "1",
        "Introduction to the events API",
        "Come join us for a chance to learn how events are managed and get to eventually try it out",
    )
}
