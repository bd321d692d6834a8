//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the repository, the activity feed and the gateway.

pub mod activity;
pub mod constants;
pub mod user;

pub use activity::{Activity, ActivityKind, ActivityUser, NewActivity};
pub use constants::*;
pub use user::{sample_users, NewUser, User, UserPatch};
