//! gRPC implementation for the user service.
//!
//! Domain failures never surface as transport-level errors: every handler
//! returns a successful transport response whose payload carries the status
//! envelope. With typed codegen a decode failure cannot reach a handler, so
//! each handler is total.

use std::sync::Arc;

use tonic::{Request, Response};

use common::{status_code, CODE_OK};
use domain::DomainError;
use proto::user::{
    user_service_server::UserService as UserServiceProto, AuthRequest, AuthResponse,
    CreateUserRequest, CreateUserResponse, GetUserRequest, GetUserResponse, Status,
    UpdateUserRequest, UpdateUserResponse,
};

use crate::service::UserService;

/// gRPC service wrapper for UserService.
pub struct UserGrpcService {
    service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

/// Envelope for a successful response.
fn status_ok() -> Status {
    Status {
        code: CODE_OK,
        message: "ok".to_string(),
    }
}

/// Envelope for a classified failure.
fn status_from(err: &DomainError) -> Status {
    Status {
        code: status_code(err),
        message: err.public_message(),
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn authenticate(
        &self,
        request: Request<AuthRequest>,
    ) -> Result<Response<AuthResponse>, tonic::Status> {
        let req = request.into_inner();

        let response = match self
            .service
            .authenticate(domain::AuthRequest {
                name: req.user_name,
                password: req.password,
            })
            .await
        {
            Ok(auth) => AuthResponse {
                user_id: auth.user_id,
                status: Some(status_ok()),
            },
            Err(err) => AuthResponse {
                user_id: String::new(),
                status: Some(status_from(&err)),
            },
        };

        Ok(Response::new(response))
    }

    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, tonic::Status> {
        let req = request.into_inner();

        let response = match self
            .service
            .create_user(domain::CreateUserRequest {
                name: req.user_name,
                password: req.password,
                age: req.user_age,
                add_info: req.add_info,
            })
            .await
        {
            Ok(created) => CreateUserResponse {
                user_id: created.user_id,
                status: Some(status_ok()),
            },
            Err(err) => CreateUserResponse {
                user_id: String::new(),
                status: Some(status_from(&err)),
            },
        };

        Ok(Response::new(response))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, tonic::Status> {
        let req = request.into_inner();

        let status = match self
            .service
            .update_user(domain::UpdateUserRequest {
                user_id: req.user_id,
                name: req.user_name,
                password: req.password,
                age: req.user_age,
                add_info: req.add_info,
            })
            .await
        {
            Ok(()) => status_ok(),
            Err(err) => status_from(&err),
        };

        Ok(Response::new(UpdateUserResponse {
            status: Some(status),
        }))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, tonic::Status> {
        let req = request.into_inner();

        let response = match self.service.get_user(&req.user_id).await {
            Ok(user) => GetUserResponse {
                user_id: user.user_id,
                user_name: user.name,
                user_age: user.age,
                add_info: user.add_info,
                status: Some(status_ok()),
            },
            Err(err) => GetUserResponse {
                user_id: String::new(),
                user_name: String::new(),
                user_age: None,
                add_info: None,
                status: Some(status_from(&err)),
            },
        };

        Ok(Response::new(response))
    }
}
