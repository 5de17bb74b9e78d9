//! HTTP adapter for result endpoints: card images and records.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateRecordRequest, ErrorResponse, HealthResponse, ResultImageQuery};
pub use handlers::ResultAppState;
pub use routes::{result_router, HEALTH_PATH, RECORDS_PATH};
