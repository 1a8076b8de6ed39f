//! Business rules on the REST side.
//!
//! Required-field validation runs here before any remote call, mirroring
//! the backend: a request that cannot succeed never crosses the network.

use std::sync::Arc;

use async_trait::async_trait;

use domain::{
    required_fields, AuthRequest, AuthResponse, CreateUserRequest, CreateUserResponse,
    DomainError, DomainResult, GetUserResponse, UpdateUserRequest, ERR_NO_FIELDS_FOR_UPDATE,
};

use crate::clients::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn authenticate(&self, req: AuthRequest) -> DomainResult<AuthResponse>;
    async fn create_user(&self, req: CreateUserRequest) -> DomainResult<CreateUserResponse>;
    async fn update_user(&self, req: UpdateUserRequest) -> DomainResult<()>;
    async fn get_user(&self, user_id: &str) -> DomainResult<GetUserResponse>;
}

/// Validates and forwards to the gRPC repository adapter.
pub struct UserProxy {
    repo: Arc<dyn UserRepository>,
}

impl UserProxy {
    /// Create new service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Empty strings on optional fields mean "not supplied".
fn normalize(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[async_trait]
impl UserService for UserProxy {
    async fn authenticate(&self, req: AuthRequest) -> DomainResult<AuthResponse> {
        if req.name.is_empty() || req.password.is_empty() {
            return Err(DomainError::invalid_argument(required_fields(&[
                "name", "password",
            ])));
        }

        self.repo.authenticate(req).await
    }

    async fn create_user(&self, req: CreateUserRequest) -> DomainResult<CreateUserResponse> {
        if req.name.is_empty() || req.password.is_empty() {
            return Err(DomainError::invalid_argument(required_fields(&[
                "name", "password",
            ])));
        }

        self.repo.create_user(req).await
    }

    async fn update_user(&self, req: UpdateUserRequest) -> DomainResult<()> {
        if req.user_id.is_empty() {
            return Err(DomainError::invalid_argument(required_fields(&["userId"])));
        }

        let req = UpdateUserRequest {
            user_id: req.user_id,
            name: normalize(req.name),
            password: normalize(req.password),
            age: req.age,
            add_info: normalize(req.add_info),
        };

        if req.password.is_none()
            && req.age.is_none()
            && req.name.is_none()
            && req.add_info.is_none()
        {
            return Err(DomainError::invalid_argument(ERR_NO_FIELDS_FOR_UPDATE));
        }

        self.repo.update_user(req).await
    }

    async fn get_user(&self, user_id: &str) -> DomainResult<GetUserResponse> {
        if user_id.is_empty() {
            return Err(DomainError::invalid_argument(required_fields(&["userId"])));
        }

        self.repo.get_user(user_id).await
    }
}
