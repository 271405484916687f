// Requests
pub mod create_task_request;
pub mod update_task_request;

// Responses
pub mod task_response;
pub mod task_delete_response;
pub mod message_response;
