//! gRPC protocol buffer definitions.
//!
//! Generated client and server code for the UserService: authenticate,
//! create, update and get, each carrying a Status envelope in the response.

/// User service definitions.
pub mod user {
    tonic::include_proto!("user");
}

// Re-export commonly used items
pub use user::user_service_client::UserServiceClient;
pub use user::user_service_server::{UserService, UserServiceServer};
