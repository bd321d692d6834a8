//! Remote users API access.

mod api;
mod deadline;
mod http;

pub use api::{ApiRequest, Method, RawResponse, UsersApi};
pub use deadline::with_deadline;
pub use http::HttpUsersApi;

#[cfg(any(test, feature = "test-utils"))]
pub use api::MockUsersApi;
