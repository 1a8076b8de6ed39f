//! gRPC client adapter for the user service.

mod user_client;

pub use user_client::{UserClient, UserRepository};

#[cfg(test)]
pub use user_client::MockUserRepository;
