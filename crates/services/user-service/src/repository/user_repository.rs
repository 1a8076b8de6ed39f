//! User repository over the relational store.
//!
//! The adapter owns storage-error classification: "no matching row" maps to
//! `NotFound`, everything else passes through unclassified and surfaces as
//! `Internal` at the transport boundary.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use domain::{DomainError, DomainResult, User};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};

#[cfg(test)]
use mockall::automock;

/// Partial update payload: only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub pwd_hash: Option<String>,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub add_info: Option<String>,
}

/// Storage adapter contract for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up the entity holding the stored hash for credential checks.
    async fn find_by_name(&self, name: &str) -> DomainResult<User>;

    /// Persist a new user.
    async fn create(&self, user: User) -> DomainResult<()>;

    /// Rewrite the supplied fields; `NotFound` when no row matched.
    async fn update(&self, user_id: &str, changes: UserChanges) -> DomainResult<()>;

    /// Fetch by identifier.
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<User>;
}

/// Concrete repository backed by SeaORM.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn storage_error(err: sea_orm::DbErr) -> DomainError {
    tracing::error!(error = %err, "database error");
    DomainError::internal(err.to_string())
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_name(&self, name: &str) -> DomainResult<User> {
        UserEntity::find()
            .filter(user::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .map(User::from)
            .ok_or(DomainError::NotFound)
    }

    async fn create(&self, new_user: User) -> DomainResult<()> {
        let model = ActiveModel {
            user_id: Set(new_user.user_id),
            name: Set(new_user.name),
            pwd_hash: Set(new_user.pwd_hash),
            age: Set(new_user.age.map(|a| a as i32)),
            add_info: Set(new_user.add_info),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(storage_error)?;
        Ok(())
    }

    async fn update(&self, user_id: &str, changes: UserChanges) -> DomainResult<()> {
        let mut query = UserEntity::update_many().filter(user::Column::UserId.eq(user_id));

        if let Some(pwd_hash) = changes.pwd_hash {
            query = query.col_expr(user::Column::PwdHash, Expr::value(pwd_hash));
        }
        if let Some(name) = changes.name {
            query = query.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(age) = changes.age {
            query = query.col_expr(user::Column::Age, Expr::value(age as i32));
        }
        if let Some(add_info) = changes.add_info {
            query = query.col_expr(user::Column::AddInfo, Expr::value(add_info));
        }

        let result = query.exec(&self.db).await.map_err(storage_error)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<User> {
        UserEntity::find()
            .filter(user::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .map(User::from)
            .ok_or(DomainError::NotFound)
    }
}
