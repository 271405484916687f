pub mod health_routes;
pub mod task_routes;

use std::sync::Arc;
use axum::Router;

use crate::app_state::AppState;

pub fn map_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(task_routes::get_router(app_state.clone()))
        .merge(health_routes::get_router(app_state))
}
