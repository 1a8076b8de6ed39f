//! gRPC client repository for the user service.
//!
//! This is the gateway's storage adapter: the four operations run against
//! the remote gRPC service, and the numeric code in each response envelope
//! is translated back into a local domain error by reversing the status
//! table in `common`.

use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::debug;

use common::{error_from_status, CODE_OK};
use domain::{
    AuthRequest, AuthResponse, CreateUserRequest, CreateUserResponse, DomainError, DomainResult,
    GetUserResponse, UpdateUserRequest,
};
use proto::user::{user_service_client::UserServiceClient as ProtoUserServiceClient, Status};

#[cfg(test)]
use mockall::automock;

/// Repository contract for the REST-side business layer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn authenticate(&self, req: AuthRequest) -> DomainResult<AuthResponse>;
    async fn create_user(&self, req: CreateUserRequest) -> DomainResult<CreateUserResponse>;
    async fn update_user(&self, req: UpdateUserRequest) -> DomainResult<()>;
    async fn get_user(&self, user_id: &str) -> DomainResult<GetUserResponse>;
}

/// gRPC client wrapper for the user service.
pub struct UserClient {
    client: ProtoUserServiceClient<Channel>,
}

impl UserClient {
    /// Connect to the user service.
    pub async fn connect(endpoint: &str) -> Result<Self, tonic::transport::Error> {
        debug!("connecting to user service at {}", endpoint);
        let client = ProtoUserServiceClient::connect(endpoint.to_string()).await?;
        Ok(Self { client })
    }
}

/// Rebuild the local error for a non-zero envelope. A missing envelope is
/// itself unclassified.
fn check_status(status: Option<Status>) -> DomainResult<()> {
    match status {
        Some(status) if status.code == CODE_OK => Ok(()),
        Some(status) => Err(error_from_status(status.code, &status.message)),
        None => Err(DomainError::internal("response carried no status")),
    }
}

/// A transport-level failure means the call never produced an envelope.
fn transport_error(status: tonic::Status) -> DomainError {
    tracing::error!(error = %status, "user service call failed");
    DomainError::internal(status.to_string())
}

#[async_trait]
impl UserRepository for UserClient {
    async fn authenticate(&self, req: AuthRequest) -> DomainResult<AuthResponse> {
        let request = tonic::Request::new(proto::user::AuthRequest {
            user_name: req.name,
            password: req.password,
        });

        let mut client = self.client.clone();
        let response = client
            .authenticate(request)
            .await
            .map_err(transport_error)?
            .into_inner();

        check_status(response.status)?;
        Ok(AuthResponse {
            user_id: response.user_id,
        })
    }

    async fn create_user(&self, req: CreateUserRequest) -> DomainResult<CreateUserResponse> {
        let request = tonic::Request::new(proto::user::CreateUserRequest {
            user_name: req.name,
            password: req.password,
            user_age: req.age,
            add_info: req.add_info,
        });

        let mut client = self.client.clone();
        let response = client
            .create_user(request)
            .await
            .map_err(transport_error)?
            .into_inner();

        check_status(response.status)?;
        Ok(CreateUserResponse {
            user_id: response.user_id,
        })
    }

    async fn update_user(&self, req: UpdateUserRequest) -> DomainResult<()> {
        let request = tonic::Request::new(proto::user::UpdateUserRequest {
            user_id: req.user_id,
            user_name: req.name,
            password: req.password,
            user_age: req.age,
            add_info: req.add_info,
        });

        let mut client = self.client.clone();
        let response = client
            .update_user(request)
            .await
            .map_err(transport_error)?
            .into_inner();

        check_status(response.status)
    }

    async fn get_user(&self, user_id: &str) -> DomainResult<GetUserResponse> {
        let request = tonic::Request::new(proto::user::GetUserRequest {
            user_id: user_id.to_string(),
        });

        let mut client = self.client.clone();
        let response = client
            .get_user(request)
            .await
            .map_err(transport_error)?
            .into_inner();

        check_status(response.status)?;
        Ok(GetUserResponse {
            user_id: response.user_id,
            name: response.user_name,
            age: response.user_age,
            add_info: response.add_info,
        })
    }
}
