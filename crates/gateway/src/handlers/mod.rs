//! HTTP handlers grouped by resource.

pub mod activity_handler;
pub mod health_handler;
pub mod user_handler;

pub use activity_handler::activity_routes;
pub use health_handler::health_routes;
pub use user_handler::user_routes;
