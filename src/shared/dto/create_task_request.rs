use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::task_status::TaskStatus;

/// Body of POST /tasks/ and PUT /tasks/{id}. A PUT carries the full record:
/// any field left out falls back to its create-time default.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

fn default_status() -> TaskStatus {
    TaskStatus::Pending
}
