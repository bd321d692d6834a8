//! Resilient User Repository
//!
//! Data access for the community directory. Every operation first tries the
//! remote users API under a fixed deadline and, when that API is unreachable
//! or answers with something unusable, serves the request from an in-memory
//! fallback store instead, so callers always get a usable result.
//!
//! # Example
//!
//! ```ignore
//! use common::ApiConfig;
//! use user_repository_lib::{ResilientUserRepository, UserRepository};
//!
//! let repo = ResilientUserRepository::from_config(ApiConfig::from_env())?;
//! let list = repo.list_users().await;
//! if let Some(diagnostic) = &list.diagnostic {
//!     eprintln!("{}", diagnostic);
//! }
//! ```

pub mod fallback;
pub mod outcome;
pub mod remote;
pub mod repository;

pub use fallback::FallbackStore;
pub use outcome::Outcome;
pub use remote::{with_deadline, ApiRequest, HttpUsersApi, Method, RawResponse, UsersApi};
pub use repository::{ResilientUserRepository, UserList, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use remote::MockUsersApi;
#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
