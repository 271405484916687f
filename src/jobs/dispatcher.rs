use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

/// A unit of background work. Jobs are fire-and-forget: the submitter never
/// learns about completion, ordering, or failure.
#[derive(Debug, Clone, PartialEq)]
pub enum JobKind {
    NotifyDue {
        task_id: Uuid,
        title: String,
        due_date: DateTime<Utc>,
        /// How long the worker waits before delivering the notification.
        delay: Duration,
    },
    GenerateReport,
}

/// Delivery channel for due-date notifications. The actual mechanism
/// (email, SMS, push) is up to the implementation; the default logs.
pub trait NotificationSender: Send + Sync {
    fn notify_due(&self, task_id: Uuid, title: &str, due_date: DateTime<Utc>);
}

/// Produces the tasks report. Content and destination are up to the
/// implementation; the default logs.
pub trait ReportGenerator: Send + Sync {
    fn generate(&self);
}

pub struct LogNotifier;

impl NotificationSender for LogNotifier {
    fn notify_due(&self, task_id: Uuid, title: &str, due_date: DateTime<Utc>) {
        tracing::info!(%task_id, title, %due_date, "task is due soon");
    }
}

pub struct LogReporter;

impl ReportGenerator for LogReporter {
    fn generate(&self) {
        tracing::info!("tasks report generated");
    }
}

/// Submit side of the job queue. Cloneable; the receive side goes to the
/// worker spawned at boot.
#[derive(Clone)]
pub struct JobDispatcher {
    tx: mpsc::UnboundedSender<JobKind>,
}

impl JobDispatcher {
    pub fn new() -> (JobDispatcher, mpsc::UnboundedReceiver<JobKind>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (JobDispatcher { tx }, rx)
    }

    /// Queue a job. A closed queue only warns: the HTTP response that
    /// triggered the job does not depend on delivery.
    pub fn submit(&self, job: JobKind) {
        if self.tx.send(job).is_err() {
            tracing::warn!("job queue closed, dropping job");
        }
    }
}
