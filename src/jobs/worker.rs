use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::jobs::dispatcher::{JobKind, NotificationSender, ReportGenerator};

/// Spawn the job worker. Runs until the submit side of the queue is dropped,
/// which in practice means the process lifetime.
pub fn spawn(
    rx: mpsc::UnboundedReceiver<JobKind>,
    sender: Arc<dyn NotificationSender>,
    generator: Arc<dyn ReportGenerator>,
) -> JoinHandle<()> {
    tokio::spawn(run(rx, sender, generator))
}

async fn run(
    mut rx: mpsc::UnboundedReceiver<JobKind>,
    sender: Arc<dyn NotificationSender>,
    generator: Arc<dyn ReportGenerator>,
) {
    while let Some(job) = rx.recv().await {
        match job {
            JobKind::NotifyDue { task_id, title, due_date, delay } => {
                // Each notification waits out its delay on its own task so a
                // far-off due date never holds up the rest of the queue.
                let sender = Arc::clone(&sender);
                tokio::spawn(async move {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    sender.notify_due(task_id, &title, due_date);
                });
            }
            JobKind::GenerateReport => generator.generate(),
        }
    }
    tracing::debug!("job queue closed, worker exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::dispatcher::JobDispatcher;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingSink {
        notified: Mutex<Vec<(Uuid, String)>>,
        reports: AtomicUsize,
    }

    impl NotificationSender for RecordingSink {
        fn notify_due(&self, task_id: Uuid, title: &str, _due_date: chrono::DateTime<Utc>) {
            self.notified.lock().unwrap().push((task_id, title.to_string()));
        }
    }

    impl ReportGenerator for RecordingSink {
        fn generate(&self) {
            self.reports.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn worker_delivers_both_job_kinds() {
        let (dispatcher, rx) = JobDispatcher::new();
        let sink = Arc::new(RecordingSink::default());
        let handle = spawn(rx, sink.clone(), sink.clone());

        let task_id = Uuid::new_v4();
        dispatcher.submit(JobKind::NotifyDue {
            task_id,
            title: "Finish project".into(),
            due_date: Utc::now(),
            delay: Duration::ZERO,
        });
        dispatcher.submit(JobKind::GenerateReport);

        drop(dispatcher);
        handle.await.unwrap();

        // The notification runs on its own task; poll briefly for it.
        tokio::time::timeout(Duration::from_secs(1), async {
            while sink.notified.lock().unwrap().is_empty() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("notification was never delivered");

        let notified = sink.notified.lock().unwrap();
        assert_eq!(notified.as_slice(), &[(task_id, "Finish project".to_string())]);
        assert_eq!(sink.reports.load(Ordering::SeqCst), 1);
    }
}
