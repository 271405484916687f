use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    create_task_request::CreateTaskRequest, task_response::TaskResponse,
    task_status::TaskStatus, update_task_request::UpdateTaskRequest,
};

/// A task document as stored in the `tasks` table. The id is assigned at
/// insert time and never changes; everything else is client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(request: CreateTaskRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            status: request.status,
            assigned_to: request.assigned_to,
            due_date: request.due_date,
        }
    }

    /// Full replacement: every field comes from the request, id is kept.
    pub fn replace(self, request: CreateTaskRequest) -> Self {
        Self {
            id: self.id,
            title: request.title,
            description: request.description,
            status: request.status,
            assigned_to: request.assigned_to,
            due_date: request.due_date,
        }
    }

    /// Partial update: only fields present in the request are touched.
    pub fn edit(self, request: UpdateTaskRequest) -> Self {
        Self {
            id: self.id,
            title: request.title.unwrap_or(self.title),
            description: request.description.or(self.description),
            status: request.status.unwrap_or(self.status),
            assigned_to: request.assigned_to.or(self.assigned_to),
            due_date: request.due_date.or(self.due_date),
        }
    }

    pub fn to_response_dto(&self) -> TaskResponse {
        TaskResponse {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            assigned_to: self.assigned_to.clone(),
            due_date: self.due_date,
        }
    }
}
