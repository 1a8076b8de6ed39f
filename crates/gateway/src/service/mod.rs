//! REST-side business layer.

mod user_service;

pub use user_service::{UserProxy, UserService};
