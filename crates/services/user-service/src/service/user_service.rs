//! Business rules for the four account operations.
//!
//! Required-field validation happens here, before any storage call. Empty
//! strings on optional update fields are treated as "not supplied".

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use domain::{
    generate_user_id, required_fields, AuthRequest, AuthResponse, CreateUserRequest,
    CreateUserResponse, DomainError, DomainResult, GetUserResponse, Password,
    UpdateUserRequest, User, ERR_NO_FIELDS_FOR_UPDATE, ERR_WRONG_PASSWORD,
};

use crate::repository::{UserChanges, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Verify credentials; returns the identifier only.
    async fn authenticate(&self, req: AuthRequest) -> DomainResult<AuthResponse>;

    /// Create a new user with a generated identifier.
    async fn create_user(&self, req: CreateUserRequest) -> DomainResult<CreateUserResponse>;

    /// Rewrite the supplied fields of an existing user.
    async fn update_user(&self, req: UpdateUserRequest) -> DomainResult<()>;

    /// Fetch a user's public fields by identifier.
    async fn get_user(&self, user_id: &str) -> DomainResult<GetUserResponse>;
}

/// Concrete implementation of UserService using the repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
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
impl UserService for UserManager {
    async fn authenticate(&self, req: AuthRequest) -> DomainResult<AuthResponse> {
        if req.name.is_empty() || req.password.is_empty() {
            return Err(DomainError::invalid_argument(required_fields(&[
                "name", "password",
            ])));
        }

        let user = self.repo.find_by_name(&req.name).await?;

        if !Password::from_hash(&user.pwd_hash).verify(&req.password) {
            warn!(name = %req.name, "password mismatch");
            return Err(DomainError::permission_denied(ERR_WRONG_PASSWORD));
        }

        Ok(AuthResponse {
            user_id: user.user_id,
        })
    }

    async fn create_user(&self, req: CreateUserRequest) -> DomainResult<CreateUserResponse> {
        if req.name.is_empty() || req.password.is_empty() {
            return Err(DomainError::invalid_argument(required_fields(&[
                "name", "password",
            ])));
        }

        let user_id = generate_user_id();
        let pwd_hash = Password::new(&req.password)?.into_string();

        self.repo
            .create(User {
                user_id: user_id.clone(),
                name: req.name,
                pwd_hash,
                age: req.age,
                add_info: normalize(req.add_info),
            })
            .await?;

        Ok(CreateUserResponse { user_id })
    }

    async fn update_user(&self, req: UpdateUserRequest) -> DomainResult<()> {
        if req.user_id.is_empty() {
            return Err(DomainError::invalid_argument(required_fields(&["userId"])));
        }

        let name = normalize(req.name);
        let password = normalize(req.password);
        let add_info = normalize(req.add_info);

        if password.is_none() && req.age.is_none() && name.is_none() && add_info.is_none() {
            return Err(DomainError::invalid_argument(ERR_NO_FIELDS_FOR_UPDATE));
        }

        // A supplied password is stored hashed, never verbatim
        let pwd_hash = match password {
            Some(password) => Some(Password::new(&password)?.into_string()),
            None => None,
        };

        self.repo
            .update(
                &req.user_id,
                UserChanges {
                    pwd_hash,
                    name,
                    age: req.age,
                    add_info,
                },
            )
            .await
    }

    async fn get_user(&self, user_id: &str) -> DomainResult<GetUserResponse> {
        if user_id.is_empty() {
            return Err(DomainError::invalid_argument(required_fields(&["userId"])));
        }

        let user = self.repo.find_by_user_id(user_id).await?;
        Ok(GetUserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::MockUserRepository;
    use domain::USER_ID_LENGTH;

    fn stored_user(user_id: &str, name: &str, password: &str) -> User {
        User {
            user_id: user_id.to_string(),
            name: name.to_string(),
            pwd_hash: Password::new(password).unwrap().into_string(),
            age: Some(37),
            add_info: None,
        }
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn authenticate_requires_name_and_password() {
        // No expectations: a storage call would fail the test
        let svc = service(MockUserRepository::new());

        for (name, password) in [("", "javier123"), ("javier", ""), ("", "")] {
            let result = svc
                .authenticate(AuthRequest {
                    name: name.to_string(),
                    password: password.to_string(),
                })
                .await;

            assert_eq!(
                result.unwrap_err(),
                DomainError::invalid_argument("name, password are required")
            );
        }
    }

    #[tokio::test]
    async fn authenticate_unknown_name_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name()
            .withf(|name| name == "nobody")
            .returning(|_| Err(DomainError::NotFound));

        let result = service(repo)
            .authenticate(AuthRequest {
                name: "nobody".to_string(),
                password: "javier123".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), DomainError::NotFound);
    }

    #[tokio::test]
    async fn authenticate_wrong_password_is_permission_denied() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Ok(stored_user("abc123xyz456", "javier", "javier123")));

        let result = service(repo)
            .authenticate(AuthRequest {
                name: "javier".to_string(),
                password: "not-it".to_string(),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            DomainError::permission_denied("wrong password")
        );
    }

    #[tokio::test]
    async fn authenticate_returns_stable_user_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name()
            .times(2)
            .returning(|_| Ok(stored_user("abc123xyz456", "javier", "javier123")));

        let svc = service(repo);
        let request = AuthRequest {
            name: "javier".to_string(),
            password: "javier123".to_string(),
        };

        let first = svc.authenticate(request.clone()).await.unwrap();
        let second = svc.authenticate(request).await.unwrap();

        assert_eq!(first.user_id, "abc123xyz456");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn create_user_requires_name_and_password() {
        let result = service(MockUserRepository::new())
            .create_user(CreateUserRequest {
                name: "javier".to_string(),
                password: String::new(),
                age: None,
                add_info: None,
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            DomainError::invalid_argument("name, password are required")
        );
    }

    #[tokio::test]
    async fn create_user_generates_id_and_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|user| {
                user.user_id.len() == USER_ID_LENGTH
                    && user.pwd_hash != "javier123"
                    && Password::from_hash(user.pwd_hash.clone()).verify("javier123")
                    && user.age == Some(37)
            })
            .returning(|_| Ok(()));

        let response = service(repo)
            .create_user(CreateUserRequest {
                name: "javier".to_string(),
                password: "javier123".to_string(),
                age: Some(37),
                add_info: None,
            })
            .await
            .unwrap();

        assert_eq!(response.user_id.len(), USER_ID_LENGTH);
    }

    #[tokio::test]
    async fn update_user_requires_user_id() {
        let result = service(MockUserRepository::new())
            .update_user(UpdateUserRequest {
                name: Some("javier".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            DomainError::invalid_argument("userId is required")
        );
    }

    #[tokio::test]
    async fn update_user_requires_at_least_one_field() {
        let svc = service(MockUserRepository::new());

        let empty = UpdateUserRequest {
            user_id: "abc123xyz456".to_string(),
            ..Default::default()
        };
        // Empty strings count as absent
        let blank = UpdateUserRequest {
            user_id: "abc123xyz456".to_string(),
            name: Some(String::new()),
            password: Some(String::new()),
            add_info: Some(String::new()),
            ..Default::default()
        };

        for request in [empty, blank] {
            assert_eq!(
                svc.update_user(request).await.unwrap_err(),
                DomainError::invalid_argument("no fields for update")
            );
        }
    }

    #[tokio::test]
    async fn update_user_rehashes_supplied_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(|user_id, changes| {
                user_id == "abc123xyz456"
                    && changes.name.is_none()
                    && changes
                        .pwd_hash
                        .as_ref()
                        .is_some_and(|hash| Password::from_hash(hash.clone()).verify("new-pass"))
            })
            .returning(|_, _| Ok(()));

        service(repo)
            .update_user(UpdateUserRequest {
                user_id: "abc123xyz456".to_string(),
                password: Some("new-pass".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_user_can_set_age_to_zero() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(|_, changes| changes.age == Some(0) && changes.pwd_hash.is_none())
            .returning(|_, _| Ok(()));

        service(repo)
            .update_user(UpdateUserRequest {
                user_id: "abc123xyz456".to_string(),
                age: Some(0),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_user_propagates_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_, _| Err(DomainError::NotFound));

        let result = service(repo)
            .update_user(UpdateUserRequest {
                user_id: "missing00000".to_string(),
                name: Some("javier".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(result.unwrap_err(), DomainError::NotFound);
    }

    #[tokio::test]
    async fn get_user_requires_user_id() {
        let result = service(MockUserRepository::new()).get_user("").await;

        assert_eq!(
            result.unwrap_err(),
            DomainError::invalid_argument("userId is required")
        );
    }

    #[tokio::test]
    async fn get_user_returns_public_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id()
            .withf(|user_id| user_id == "abc123xyz456")
            .returning(|_| Ok(stored_user("abc123xyz456", "javier", "javier123")));

        let response = service(repo).get_user("abc123xyz456").await.unwrap();

        assert_eq!(response.user_id, "abc123xyz456");
        assert_eq!(response.name, "javier");
        assert_eq!(response.age, Some(37));
        assert_eq!(response.add_info, None);
    }

    #[tokio::test]
    async fn get_user_unknown_id_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id()
            .returning(|_| Err(DomainError::NotFound));

        let result = service(repo).get_user("missing00000").await;
        assert_eq!(result.unwrap_err(), DomainError::NotFound);
    }
}
