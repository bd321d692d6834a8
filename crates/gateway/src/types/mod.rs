//! Request and response types.

mod requests;
mod responses;

pub use requests::{validate_request, validation_error, CreateUserRequest, UpdateUserRequest};
pub use responses::{DeleteResponse, DirectoryStats, UserListResponse};
