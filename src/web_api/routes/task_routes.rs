use std::sync::Arc;
use axum::{Router, routing::{delete, get, patch, post, put}};
use crate::{app_state::AppState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/tasks";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(format!("{}/", ROUTER_PATH).as_str(), post(TaskController::create))
        .route(format!("{}/", ROUTER_PATH).as_str(), get(TaskController::get_all))
        .route(format!("{}/generate-report", ROUTER_PATH).as_str(), post(TaskController::generate_report))
        .route(format!("{}/status/:status", ROUTER_PATH).as_str(), get(TaskController::get_by_status))
        .route(format!("{}/:task_id", ROUTER_PATH).as_str(), get(TaskController::get_by_id))
        .route(format!("{}/:task_id", ROUTER_PATH).as_str(), put(TaskController::replace))
        .route(format!("{}/:task_id", ROUTER_PATH).as_str(), patch(TaskController::update))
        .route(format!("{}/:task_id", ROUTER_PATH).as_str(), delete(TaskController::delete))
        .route(format!("{}/:task_id/schedule", ROUTER_PATH).as_str(), post(TaskController::schedule_notification))
        .with_state(app_state)
}
