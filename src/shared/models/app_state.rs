use std::sync::Arc;
use crate::services::task_service::TaskService;

pub struct AppState {
    pub tasks: TaskService,
}

pub type SharedState = Arc<AppState>;
