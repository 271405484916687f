//---------------------------------------
pub mod web_api {
    pub mod routes;
    pub mod controllers;
}

pub use web_api::routes::map_routes;
pub use web_api::controllers::*;
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod models;
    pub mod dto;
}

pub use shared::models::*;
pub use shared::dto::*;
//---------------------------------------

//---------------------------------------
pub mod services {
    pub mod task_service;
}

pub use services::*;
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod data_context;
}

pub use data_access::*;
//---------------------------------------

//---------------------------------------
pub mod jobs {
    pub mod dispatcher;
    pub mod worker;
}

pub use jobs::*;
//---------------------------------------
