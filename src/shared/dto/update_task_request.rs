use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::task_status::TaskStatus;

/// Body of PATCH /tasks/{id}. Absent and null fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// True when the body carries nothing to apply (mapped to 400).
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.assigned_to.is_none()
            && self.due_date.is_none()
    }
}
