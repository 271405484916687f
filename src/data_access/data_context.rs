use redb::{Database, ReadableTable, TableDefinition};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::{task::Task, task_status::TaskStatus};

const TASKS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("tasks");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database: {0}")]
    Database(#[from] redb::DatabaseError),
    #[error("transaction: {0}")]
    Transaction(#[from] redb::TransactionError),
    #[error("table: {0}")]
    Table(#[from] redb::TableError),
    #[error("storage: {0}")]
    Storage(#[from] redb::StorageError),
    #[error("commit: {0}")]
    Commit(#[from] redb::CommitError),
    #[error("codec: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Handle to the tasks store: one redb file, one flat table of JSON
/// documents keyed by UUID bytes. Opened once at boot, cloned into state.
#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        let _ = write_txn.open_table(TASKS_TABLE)?;
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    /// Insert or overwrite the document under its own id.
    pub fn put_task(&self, task: &Task) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let task_bytes = serde_json::to_vec(task)?;
            let id_bytes = task.id.as_bytes();
            tasks_table.insert(id_bytes.as_slice(), task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_task(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let id_bytes = id.as_bytes();
        match tasks_table.get(id_bytes.as_slice())? {
            Some(data) => {
                let task: Task = serde_json::from_slice(data.value())?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let mut tasks = Vec::new();
        for entry in tasks_table.iter()? {
            let (_, value) = entry?;
            let task: Task = serde_json::from_slice(value.value())?;
            tasks.push(task);
        }
        Ok(tasks)
    }

    /// Full-table scan filtered on status. The table is flat and unindexed.
    pub fn list_tasks_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let mut tasks = Vec::new();
        for entry in tasks_table.iter()? {
            let (_, value) = entry?;
            let task: Task = serde_json::from_slice(value.value())?;
            if task.status == status {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    pub fn delete_task(&self, id: Uuid) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write()?;
        let deleted;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let id_bytes = id.as_bytes();
            let result = tasks_table.remove(id_bytes.as_slice())?;
            deleted = result.is_some();
        }
        write_txn.commit()?;
        Ok(deleted)
    }
}
