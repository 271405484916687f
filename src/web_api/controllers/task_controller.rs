use axum::{Json, extract::{Path, State}, http::StatusCode};
use uuid::Uuid;

use crate::{
    app_state::SharedState, create_task_request::CreateTaskRequest,
    data_context::StoreError, message_response::MessageResponse,
    task_delete_response::TaskDeleteResponse, task_response::TaskResponse,
    task_status::TaskStatus, update_task_request::UpdateTaskRequest,
};

type ApiError = (StatusCode, String);

/// Malformed ids are a client error on every route, uniformly 400.
fn parse_task_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, format!("Malformed task id '{raw}'")))
}

fn internal(e: StoreError) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, "Task not found".to_string())
}

pub struct TaskController {}

impl TaskController {
    // POST /tasks/
    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<CreateTaskRequest>,
    ) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
        let task = state.tasks.create(body).map_err(internal)?;
        tracing::info!(task_id = %task.id, "task created");
        Ok((StatusCode::CREATED, Json(task.to_response_dto())))
    }

    // GET /tasks/
    pub async fn get_all(
        State(state): State<SharedState>,
    ) -> Result<Json<Vec<TaskResponse>>, ApiError> {
        state
            .tasks
            .get_all()
            .map(|tasks| Json(tasks.iter().map(|t| t.to_response_dto()).collect()))
            .map_err(internal)
    }

    // GET /tasks/:task_id
    pub async fn get_by_id(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
    ) -> Result<Json<TaskResponse>, ApiError> {
        let id = parse_task_id(&task_id)?;
        match state.tasks.get_by_id(id).map_err(internal)? {
            Some(task) => Ok(Json(task.to_response_dto())),
            None => Err(not_found()),
        }
    }

    // PUT /tasks/:task_id — full replacement, all fields from the body.
    pub async fn replace(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
        Json(body): Json<CreateTaskRequest>,
    ) -> Result<Json<TaskResponse>, ApiError> {
        let id = parse_task_id(&task_id)?;
        match state.tasks.replace(id, body).map_err(internal)? {
            Some(task) => Ok(Json(task.to_response_dto())),
            None => Err(not_found()),
        }
    }

    // PATCH /tasks/:task_id — only the provided fields are touched.
    pub async fn update(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
        Json(body): Json<UpdateTaskRequest>,
    ) -> Result<Json<TaskResponse>, ApiError> {
        let id = parse_task_id(&task_id)?;
        if body.is_empty() {
            return Err((StatusCode::BAD_REQUEST, "No data provided for update".to_string()));
        }
        match state.tasks.update(id, body).map_err(internal)? {
            Some(task) => Ok(Json(task.to_response_dto())),
            None => Err(not_found()),
        }
    }

    // DELETE /tasks/:task_id
    pub async fn delete(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
    ) -> Result<Json<TaskDeleteResponse>, ApiError> {
        let id = parse_task_id(&task_id)?;
        if !state.tasks.delete(id).map_err(internal)? {
            return Err(not_found());
        }
        tracing::info!(task_id = %id, "task deleted");
        Ok(Json(TaskDeleteResponse { deleted_id: id }))
    }

    // GET /tasks/status/:status
    // An empty result maps to 404, not an empty 200.
    pub async fn get_by_status(
        State(state): State<SharedState>,
        Path(status): Path<TaskStatus>,
    ) -> Result<Json<Vec<TaskResponse>>, ApiError> {
        let tasks = state.tasks.list_by_status(status).map_err(internal)?;
        if tasks.is_empty() {
            return Err((
                StatusCode::NOT_FOUND,
                format!("No tasks found with status '{status}'"),
            ));
        }
        Ok(Json(tasks.iter().map(|t| t.to_response_dto()).collect()))
    }

    // POST /tasks/:task_id/schedule
    pub async fn schedule_notification(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        let id = parse_task_id(&task_id)?;
        match state.tasks.schedule_notification(id).map_err(internal)? {
            Some(delay_secs) => {
                tracing::info!(task_id = %id, delay_secs, "notification scheduled");
                Ok(Json(MessageResponse::new(format!(
                    "Notification for task {id} scheduled in {delay_secs} seconds"
                ))))
            }
            None => Err((
                StatusCode::NOT_FOUND,
                "Task not found or has no due date".to_string(),
            )),
        }
    }

    // POST /tasks/generate-report
    pub async fn generate_report(
        State(state): State<SharedState>,
    ) -> Json<MessageResponse> {
        state.tasks.run_report_generation();
        Json(MessageResponse::new("Report generation started"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app_state::AppState, data_context::DataContext,
        jobs::dispatcher::JobDispatcher, task_service::TaskService,
    };
    use chrono::{Duration, Utc};
    use std::fs;
    use std::sync::Arc;

    fn temp_state(name: &str) -> (SharedState, String) {
        let path = format!("/tmp/taskboard_api_{name}_{}.redb", std::process::id());
        let _ = fs::remove_file(&path);
        let store = DataContext::new(&path).unwrap();
        // Receiver dropped: submissions degrade to warnings, which is fine here.
        let (jobs, _rx) = JobDispatcher::new();
        let state = Arc::new(AppState { tasks: TaskService::new(store, jobs) });
        (state, path)
    }

    fn cleanup(path: &str) {
        let _ = fs::remove_file(path);
    }

    fn create_body(title: &str) -> CreateTaskRequest {
        serde_json::from_str(&format!(r#"{{"title": "{title}"}}"#)).unwrap()
    }

    #[tokio::test]
    async fn create_defaults_to_pending_and_returns_201() {
        let (state, path) = temp_state("create");

        let (code, Json(task)) =
            TaskController::create(State(state.clone()), Json(create_body("Finish project")))
                .await
                .unwrap();

        assert_eq!(code, StatusCode::CREATED);
        assert_eq!(task.status, TaskStatus::Pending);

        let Json(fetched) =
            TaskController::get_by_id(State(state), Path(task.id.to_string())).await.unwrap();
        assert_eq!(fetched.title, "Finish project");

        cleanup(&path);
    }

    #[tokio::test]
    async fn malformed_id_is_400_on_every_route() {
        let (state, path) = temp_state("malformed");
        let bad = "not-a-uuid".to_string();

        let (code, _) = TaskController::get_by_id(State(state.clone()), Path(bad.clone()))
            .await
            .unwrap_err();
        assert_eq!(code, StatusCode::BAD_REQUEST);

        let (code, _) = TaskController::replace(
            State(state.clone()),
            Path(bad.clone()),
            Json(create_body("x")),
        )
        .await
        .unwrap_err();
        assert_eq!(code, StatusCode::BAD_REQUEST);

        let (code, _) = TaskController::update(
            State(state.clone()),
            Path(bad.clone()),
            Json(serde_json::from_str(r#"{"status": "completed"}"#).unwrap()),
        )
        .await
        .unwrap_err();
        assert_eq!(code, StatusCode::BAD_REQUEST);

        let (code, _) = TaskController::delete(State(state), Path(bad)).await.unwrap_err();
        assert_eq!(code, StatusCode::BAD_REQUEST);

        cleanup(&path);
    }

    #[tokio::test]
    async fn put_replaces_whole_record_and_404s_on_absent_id() {
        let (state, path) = temp_state("replace");

        let body: CreateTaskRequest = serde_json::from_str(
            r#"{"title": "Old", "description": "details", "assigned_to": "john@example.com"}"#,
        )
        .unwrap();
        let (_, Json(task)) =
            TaskController::create(State(state.clone()), Json(body)).await.unwrap();

        let replacement: CreateTaskRequest =
            serde_json::from_str(r#"{"title": "New", "status": "in_progress"}"#).unwrap();
        let Json(replaced) = TaskController::replace(
            State(state.clone()),
            Path(task.id.to_string()),
            Json(replacement),
        )
        .await
        .unwrap();

        assert_eq!(replaced.id, task.id);
        assert_eq!(replaced.title, "New");
        assert_eq!(replaced.status, TaskStatus::InProgress);
        // Fields left out of a PUT body fall back to their defaults.
        assert_eq!(replaced.description, None);
        assert_eq!(replaced.assigned_to, None);

        let (code, _) = TaskController::replace(
            State(state),
            Path(Uuid::new_v4().to_string()),
            Json(create_body("x")),
        )
        .await
        .unwrap_err();
        assert_eq!(code, StatusCode::NOT_FOUND);

        cleanup(&path);
    }

    #[tokio::test]
    async fn patch_with_empty_body_is_400() {
        let (state, path) = temp_state("empty_patch");

        let (_, Json(task)) =
            TaskController::create(State(state.clone()), Json(create_body("Finish project")))
                .await
                .unwrap();

        let (code, detail) = TaskController::update(
            State(state),
            Path(task.id.to_string()),
            Json(serde_json::from_str("{}").unwrap()),
        )
        .await
        .unwrap_err();

        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(detail, "No data provided for update");

        cleanup(&path);
    }

    #[tokio::test]
    async fn patch_status_leaves_other_fields_untouched() {
        let (state, path) = temp_state("patch_status");

        let body: CreateTaskRequest = serde_json::from_str(
            r#"{"title": "Finish project", "description": "details", "assigned_to": "john@example.com"}"#,
        )
        .unwrap();
        let (_, Json(task)) =
            TaskController::create(State(state.clone()), Json(body)).await.unwrap();

        let Json(updated) = TaskController::update(
            State(state),
            Path(task.id.to_string()),
            Json(serde_json::from_str(r#"{"status": "completed"}"#).unwrap()),
        )
        .await
        .unwrap();

        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.title, "Finish project");
        assert_eq!(updated.description.as_deref(), Some("details"));
        assert_eq!(updated.assigned_to.as_deref(), Some("john@example.com"));

        cleanup(&path);
    }

    #[tokio::test]
    async fn delete_flow_then_get_is_404() {
        let (state, path) = temp_state("delete_flow");

        let (code, _) =
            TaskController::delete(State(state.clone()), Path(Uuid::new_v4().to_string()))
                .await
                .unwrap_err();
        assert_eq!(code, StatusCode::NOT_FOUND);

        let (_, Json(task)) =
            TaskController::create(State(state.clone()), Json(create_body("Doomed")))
                .await
                .unwrap();

        let Json(ack) =
            TaskController::delete(State(state.clone()), Path(task.id.to_string()))
                .await
                .unwrap();
        assert_eq!(ack.deleted_id, task.id);

        let (code, _) =
            TaskController::get_by_id(State(state), Path(task.id.to_string()))
                .await
                .unwrap_err();
        assert_eq!(code, StatusCode::NOT_FOUND);

        cleanup(&path);
    }

    #[tokio::test]
    async fn status_filter_returns_matches_and_404_when_empty() {
        let (state, path) = temp_state("status_filter");

        for (title, status) in [("a", "pending"), ("b", "completed"), ("c", "pending")] {
            let body: CreateTaskRequest = serde_json::from_str(&format!(
                r#"{{"title": "{title}", "status": "{status}"}}"#
            ))
            .unwrap();
            TaskController::create(State(state.clone()), Json(body)).await.unwrap();
        }

        let Json(pending) =
            TaskController::get_by_status(State(state.clone()), Path(TaskStatus::Pending))
                .await
                .unwrap();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|t| t.status == TaskStatus::Pending));

        let (code, detail) =
            TaskController::get_by_status(State(state), Path(TaskStatus::InProgress))
                .await
                .unwrap_err();
        assert_eq!(code, StatusCode::NOT_FOUND);
        assert_eq!(detail, "No tasks found with status 'in_progress'");

        cleanup(&path);
    }

    #[tokio::test]
    async fn schedule_reports_delay_and_404_without_due_date() {
        let (state, path) = temp_state("schedule");

        let due = (Utc::now() + Duration::seconds(90)).to_rfc3339();
        let body: CreateTaskRequest = serde_json::from_str(&format!(
            r#"{{"title": "Due soon", "due_date": "{due}"}}"#
        ))
        .unwrap();
        let (_, Json(task)) =
            TaskController::create(State(state.clone()), Json(body)).await.unwrap();

        let Json(ack) = TaskController::schedule_notification(
            State(state.clone()),
            Path(task.id.to_string()),
        )
        .await
        .unwrap();
        assert!(ack.message.contains("scheduled in"), "got: {}", ack.message);

        let (_, Json(no_due)) =
            TaskController::create(State(state.clone()), Json(create_body("No due date")))
                .await
                .unwrap();
        let (code, _) = TaskController::schedule_notification(
            State(state),
            Path(no_due.id.to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(code, StatusCode::NOT_FOUND);

        cleanup(&path);
    }
}
