//! User entity and per-operation DTOs.

/// User domain entity.
///
/// `pwd_hash` never crosses a transport boundary; responses are built from
/// the DTOs below. `age` and `add_info` carry explicit presence so that an
/// unset field is distinguishable from a zero or empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Server-generated opaque identifier, unique
    pub user_id: String,
    /// Display name, unique, used for authentication lookup
    pub name: String,
    /// Salted password hash, opaque
    pub pwd_hash: String,
    pub age: Option<u32>,
    pub add_info: Option<String>,
}

/// Authentication request: both fields required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub name: String,
    pub password: String,
}

/// Successful authentication carries the identifier only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub user_id: String,
}

/// Creation request: `name` and `password` required, the rest optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    pub age: Option<u32>,
    pub add_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserResponse {
    pub user_id: String,
}

/// Partial update: `user_id` required, every other field optional; only
/// supplied fields are rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub user_id: String,
    pub name: Option<String>,
    pub password: Option<String>,
    pub age: Option<u32>,
    pub add_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserResponse {
    pub user_id: String,
    pub name: String,
    pub age: Option<u32>,
    pub add_info: Option<String>,
}

impl From<User> for GetUserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            age: user.age,
            add_info: user.add_info,
        }
    }
}
