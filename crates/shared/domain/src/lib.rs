//! Domain layer - core entities, per-operation DTOs and the error taxonomy.
//!
//! This crate contains pure domain logic with no transport or storage
//! dependencies. Both services share these types.

pub mod constants;
pub mod error;
pub mod password;
pub mod user;
pub mod user_id;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{
    AuthRequest, AuthResponse, CreateUserRequest, CreateUserResponse, GetUserResponse,
    UpdateUserRequest, User,
};
pub use user_id::generate_user_id;
