use std::sync::Arc;

use taskboard_server::{
    app_state::AppState,
    data_context::DataContext,
    dispatcher::{JobDispatcher, LogNotifier, LogReporter},
    jobs::worker,
    map_routes,
    settings::Settings,
    task_service::TaskService,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env();

    // ── Open the store ─────────────────────────────────────────
    let store = DataContext::new(&settings.db_path)
        .expect("Failed to open tasks store");

    let task_count = store
        .list_tasks()
        .expect("Failed to read tasks store")
        .len();
    tracing::info!(db = %settings.db_path, task_count, "tasks store opened");

    // ── Job queue + worker ─────────────────────────────────────
    let (jobs, job_rx) = JobDispatcher::new();
    worker::spawn(job_rx, Arc::new(LogNotifier), Arc::new(LogReporter));

    // ── Shared state ───────────────────────────────────────────
    let state = Arc::new(AppState {
        tasks: TaskService::new(store, jobs),
    });

    // ── Router ─────────────────────────────────────────────────
    let app = map_routes(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // ── Start ──────────────────────────────────────────────────
    tracing::info!(addr = %settings.bind_addr, "server running");

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
