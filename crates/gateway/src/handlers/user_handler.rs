//! User operation handlers.
//!
//! Wire DTOs use camelCase field names; missing `name`/`pwd` decode to empty
//! strings so the business layer can answer with its canonical
//! required-fields message instead of a serde error.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::ApiResult;
use domain::{AuthRequest, CreateUserRequest, GetUserResponse, UpdateUserRequest};

use crate::extractors::ApiJson;
use crate::state::AppState;

/// Authentication request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthBody {
    /// Display name
    #[serde(default)]
    #[schema(example = "javier")]
    pub name: String,
    /// Cleartext password
    #[serde(default)]
    #[schema(example = "javier123")]
    pub pwd: String,
}

/// User creation request body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
    #[serde(default)]
    #[schema(example = "javier")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "javier123")]
    pub pwd: String,
    #[schema(example = 37)]
    pub age: Option<u32>,
    #[schema(example = "likes rust")]
    pub add_info: Option<String>,
}

/// Partial update request body; at least one field must be present.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBody {
    pub name: Option<String>,
    pub pwd: Option<String>,
    pub age: Option<u32>,
    pub add_info: Option<String>,
}

/// Response carrying the user identifier only.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserIdBody {
    pub user_id: String,
}

/// Public user representation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_info: Option<String>,
}

impl From<GetUserResponse> for UserBody {
    fn from(user: GetUserResponse) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            age: user.age,
            add_info: user.add_info,
        }
    }
}

/// Create user routes.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth", post(authenticate))
        .route("/api", post(create_user))
        .route("/api/:user_id", axum::routing::put(update_user).get(get_user))
}

/// Authenticate by name and password
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "Users",
    request_body = AuthBody,
    responses(
        (status = 200, description = "Credentials accepted", body = UserIdBody),
        (status = 400, description = "Missing name or password"),
        (status = 403, description = "Wrong password"),
        (status = 404, description = "User not found")
    )
)]
pub async fn authenticate(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AuthBody>,
) -> ApiResult<Json<UserIdBody>> {
    let auth = state
        .service
        .authenticate(AuthRequest {
            name: body.name,
            password: body.pwd,
        })
        .await?;

    Ok(Json(UserIdBody {
        user_id: auth.user_id,
    }))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api",
    tag = "Users",
    request_body = CreateBody,
    responses(
        (status = 200, description = "User created", body = UserIdBody),
        (status = 400, description = "Missing name or password")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateBody>,
) -> ApiResult<Json<UserIdBody>> {
    let created = state
        .service
        .create_user(CreateUserRequest {
            name: body.name,
            password: body.pwd,
            age: body.age,
            add_info: body.add_info,
        })
        .await?;

    Ok(Json(UserIdBody {
        user_id: created.user_id,
    }))
}

/// Update fields of an existing user
#[utoipa::path(
    put,
    path = "/api/{userId}",
    tag = "Users",
    params(
        ("userId" = String, Path, description = "User identifier")
    ),
    request_body = UpdateBody,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Missing userId or no fields to update"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<UpdateBody>,
) -> ApiResult<StatusCode> {
    state
        .service
        .update_user(UpdateUserRequest {
            user_id,
            name: body.name,
            password: body.pwd,
            age: body.age,
            add_info: body.add_info,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fetch a user by identifier
#[utoipa::path(
    get,
    path = "/api/{userId}",
    tag = "Users",
    params(
        ("userId" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User found", body = UserBody),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserBody>> {
    let user = state.service.get_user(&user_id).await?;
    Ok(Json(UserBody::from(user)))
}
