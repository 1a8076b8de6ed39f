//! Status-envelope tests for the gRPC layer.
//!
//! Drives the real business layer through the tonic service implementation
//! against an in-memory repository stub, and asserts that every outcome is
//! a transport-successful response carrying the right envelope.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tonic::Request;

use domain::{DomainError, DomainResult, Password, User};
use proto::user::user_service_server::UserService as UserServiceProto;
use proto::user::{AuthRequest, CreateUserRequest, GetUserRequest, UpdateUserRequest};
use user_service_lib::grpc::UserGrpcService;
use user_service_lib::repository::{UserChanges, UserRepository};
use user_service_lib::service::UserManager;

/// In-memory repository keyed by user id.
#[derive(Default)]
struct MemoryRepo {
    users: Mutex<HashMap<String, User>>,
    fail_with: Option<DomainError>,
}

impl MemoryRepo {
    fn with_user(user: User) -> Self {
        let repo = Self::default();
        repo.users
            .lock()
            .unwrap()
            .insert(user.user_id.clone(), user);
        repo
    }

    fn failing(err: DomainError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    fn check_failure(&self) -> DomainResult<()> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryRepo {
    async fn find_by_name(&self, name: &str) -> DomainResult<User> {
        self.check_failure()?;
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.name == name)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn create(&self, user: User) -> DomainResult<()> {
        self.check_failure()?;
        self.users
            .lock()
            .unwrap()
            .insert(user.user_id.clone(), user);
        Ok(())
    }

    async fn update(&self, user_id: &str, changes: UserChanges) -> DomainResult<()> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(user_id).ok_or(DomainError::NotFound)?;

        if let Some(pwd_hash) = changes.pwd_hash {
            user.pwd_hash = pwd_hash;
        }
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(age) = changes.age {
            user.age = Some(age);
        }
        if let Some(add_info) = changes.add_info {
            user.add_info = Some(add_info);
        }
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<User> {
        self.check_failure()?;
        self.users
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }
}

fn grpc_service(repo: MemoryRepo) -> UserGrpcService {
    UserGrpcService::new(Arc::new(UserManager::new(Arc::new(repo))))
}

fn javier() -> User {
    User {
        user_id: "abc123xyz456".to_string(),
        name: "javier".to_string(),
        pwd_hash: Password::new("javier123").unwrap().into_string(),
        age: Some(37),
        add_info: Some("likes rust".to_string()),
    }
}

#[tokio::test]
async fn authenticate_missing_fields_yields_invalid_argument_envelope() {
    let service = grpc_service(MemoryRepo::default());

    let response = service
        .authenticate(Request::new(AuthRequest {
            user_name: String::new(),
            password: String::new(),
        }))
        .await
        .expect("domain failures must not become transport errors")
        .into_inner();

    let status = response.status.unwrap();
    assert_eq!(status.code, 3);
    assert_eq!(status.message, "name, password are required");
    assert_eq!(response.user_id, "");
}

#[tokio::test]
async fn authenticate_unknown_name_yields_not_found_envelope() {
    let service = grpc_service(MemoryRepo::default());

    let response = service
        .authenticate(Request::new(AuthRequest {
            user_name: "nobody".to_string(),
            password: "javier123".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let status = response.status.unwrap();
    assert_eq!(status.code, 5);
    assert_eq!(status.message, "user not found");
}

#[tokio::test]
async fn authenticate_wrong_password_yields_permission_denied_envelope() {
    let service = grpc_service(MemoryRepo::with_user(javier()));

    let response = service
        .authenticate(Request::new(AuthRequest {
            user_name: "javier".to_string(),
            password: "not-it".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let status = response.status.unwrap();
    assert_eq!(status.code, 7);
    assert_eq!(status.message, "wrong password");
}

#[tokio::test]
async fn authenticate_success_carries_user_id_and_code_zero() {
    let service = grpc_service(MemoryRepo::with_user(javier()));

    let response = service
        .authenticate(Request::new(AuthRequest {
            user_name: "javier".to_string(),
            password: "javier123".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let status = response.status.unwrap();
    assert_eq!(status.code, 0);
    assert_eq!(status.message, "ok");
    assert_eq!(response.user_id, "abc123xyz456");
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let repo = MemoryRepo::default();
    let service = grpc_service(repo);

    let created = service
        .create_user(Request::new(CreateUserRequest {
            user_name: "javier".to_string(),
            password: "javier123".to_string(),
            user_age: Some(37),
            add_info: None,
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(created.status.unwrap().code, 0);
    assert_eq!(created.user_id.len(), 12);

    let fetched = service
        .get_user(Request::new(GetUserRequest {
            user_id: created.user_id.clone(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(fetched.status.unwrap().code, 0);
    assert_eq!(fetched.user_id, created.user_id);
    assert_eq!(fetched.user_name, "javier");
    assert_eq!(fetched.user_age, Some(37));
}

#[tokio::test]
async fn update_without_fields_yields_invalid_argument_envelope() {
    let service = grpc_service(MemoryRepo::with_user(javier()));

    let response = service
        .update_user(Request::new(UpdateUserRequest {
            user_id: "abc123xyz456".to_string(),
            user_name: None,
            password: None,
            user_age: None,
            add_info: None,
        }))
        .await
        .unwrap()
        .into_inner();

    let status = response.status.unwrap();
    assert_eq!(status.code, 3);
    assert_eq!(status.message, "no fields for update");
}

#[tokio::test]
async fn update_unknown_user_yields_not_found_envelope() {
    let service = grpc_service(MemoryRepo::default());

    let response = service
        .update_user(Request::new(UpdateUserRequest {
            user_id: "missing00000".to_string(),
            user_name: Some("javier".to_string()),
            password: None,
            user_age: None,
            add_info: None,
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.status.unwrap().code, 5);
}

#[tokio::test]
async fn update_age_to_zero_is_observable() {
    let service = grpc_service(MemoryRepo::with_user(javier()));

    let updated = service
        .update_user(Request::new(UpdateUserRequest {
            user_id: "abc123xyz456".to_string(),
            user_name: None,
            password: None,
            user_age: Some(0),
            add_info: None,
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(updated.status.unwrap().code, 0);

    let fetched = service
        .get_user(Request::new(GetUserRequest {
            user_id: "abc123xyz456".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(fetched.user_age, Some(0));
}

#[tokio::test]
async fn get_user_missing_id_yields_invalid_argument_envelope() {
    let service = grpc_service(MemoryRepo::default());

    let response = service
        .get_user(Request::new(GetUserRequest {
            user_id: String::new(),
        }))
        .await
        .unwrap()
        .into_inner();

    let status = response.status.unwrap();
    assert_eq!(status.code, 3);
    assert_eq!(status.message, "userId is required");
}

#[tokio::test]
async fn unclassified_failures_carry_generic_internal_envelope() {
    let service = grpc_service(MemoryRepo::failing(DomainError::internal(
        "connection reset by peer",
    )));

    let response = service
        .get_user(Request::new(GetUserRequest {
            user_id: "abc123xyz456".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let status = response.status.unwrap();
    assert_eq!(status.code, 13);
    // Implementation detail must not leak to callers
    assert_eq!(status.message, "unexpected error");
}
