use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
    create_task_request::CreateTaskRequest,
    data_context::{DataContext, StoreError},
    jobs::dispatcher::{JobDispatcher, JobKind},
    task::Task,
    task_status::TaskStatus,
    update_task_request::UpdateTaskRequest,
};

/// How far ahead of the due date the notification fires, in seconds.
const NOTIFY_LEAD_SECS: i64 = 60;

/// Time left until a notification should go out: (due − now) − lead,
/// floored at zero so overdue tasks notify immediately.
pub fn notify_delay(due_date: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let delay = due_date - now - Duration::seconds(NOTIFY_LEAD_SECS);
    delay.max(Duration::zero())
}

/// CRUD and job orchestration over the tasks store. Each operation is a
/// single unit of work; the store serializes per-document access internally.
#[derive(Clone)]
pub struct TaskService {
    store: DataContext,
    jobs: JobDispatcher,
}

impl TaskService {
    pub fn new(store: DataContext, jobs: JobDispatcher) -> Self {
        TaskService { store, jobs }
    }

    pub fn create(&self, request: CreateTaskRequest) -> Result<Task, StoreError> {
        let task = Task::new(request);
        self.store.put_task(&task)?;
        Ok(task)
    }

    pub fn get_all(&self) -> Result<Vec<Task>, StoreError> {
        self.store.list_tasks()
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        self.store.get_task(id)
    }

    /// Overwrite every field of an existing task. Replacing with identical
    /// content is a success (idempotent); only an absent id is None.
    pub fn replace(&self, id: Uuid, request: CreateTaskRequest) -> Result<Option<Task>, StoreError> {
        let Some(existing) = self.store.get_task(id)? else {
            return Ok(None);
        };
        let replaced = existing.replace(request);
        self.store.put_task(&replaced)?;
        Ok(Some(replaced))
    }

    /// Apply only the fields present in the request.
    pub fn update(&self, id: Uuid, request: UpdateTaskRequest) -> Result<Option<Task>, StoreError> {
        let Some(existing) = self.store.get_task(id)? else {
            return Ok(None);
        };
        let updated = existing.edit(request);
        self.store.put_task(&updated)?;
        Ok(Some(updated))
    }

    /// Returns true when a record was actually removed.
    pub fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.store.delete_task(id)
    }

    pub fn list_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, StoreError> {
        self.store.list_tasks_by_status(status)
    }

    /// Queue a due-date notification for the task. Returns the delay in
    /// whole seconds, or None when the task or its due_date is absent.
    pub fn schedule_notification(&self, id: Uuid) -> Result<Option<i64>, StoreError> {
        let Some(task) = self.store.get_task(id)? else {
            return Ok(None);
        };
        let Some(due_date) = task.due_date else {
            return Ok(None);
        };

        let delay = notify_delay(due_date, Utc::now());
        self.jobs.submit(JobKind::NotifyDue {
            task_id: task.id,
            title: task.title,
            due_date,
            delay: delay.to_std().unwrap_or_default(),
        });
        Ok(Some(delay.num_seconds()))
    }

    /// Fire-and-forget report job; nothing is tracked.
    pub fn run_report_generation(&self) {
        self.jobs.submit(JobKind::GenerateReport);
    }
}
