use axum::Json;

use crate::message_response::MessageResponse;

pub struct HealthController {}

impl HealthController {
    /// Service banner at the root path.
    pub async fn root() -> Json<MessageResponse> {
        Json(MessageResponse::new("taskboard-server up"))
    }

    pub async fn get() -> Json<MessageResponse> {
        Json(MessageResponse::new("ok"))
    }
}
