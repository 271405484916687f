use std::env;

const DEFAULT_DB_PATH: &str = "tasks.redb";
const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Process configuration, read once at boot.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the redb file holding the tasks table. `TASKS_DB`.
    pub db_path: String,
    /// Listen address for the HTTP server. `TASKS_BIND`.
    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings {
            db_path: env::var("TASKS_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            bind_addr: env::var("TASKS_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
        }
    }
}
