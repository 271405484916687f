use serde::{Deserialize, Serialize};

/// Plain acknowledgement body used by the schedule and report endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}
