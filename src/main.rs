use std::{env, sync::Arc};

use notes_api::{api_router, repository::Repository, service::NoteService};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch env variables
    let database_dsn =
        env::var("PG_DSN").expect("database dsn must be provided as an ENV variable");

    // Repository creation and migration
    let mut repo = Repository::new(database_dsn).await.unwrap_or_else(|e| {
        tracing::error!("Failed to establish database connection: {e}");
        panic!("failed to establish database connection: {e}");
    });

    repo.migrate().await.unwrap_or_else(|e| {
        tracing::error!("Failed to migrate database: {e}");
        panic!("failed to migrate database: {e}");
    });

    // Service creation
    let service = Arc::new(NoteService::new(Arc::new(repo)));

    let router = api_router(service);

    let http_listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
    let http_addr = http_listener.local_addr().unwrap();

    tracing::info!("Notes API starting, listening on {}", http_addr);

    if let Err(e) = axum::serve(http_listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
