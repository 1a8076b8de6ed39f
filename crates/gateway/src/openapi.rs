//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::{AuthBody, CreateBody, UpdateBody, UserBody, UserIdBody};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service REST Gateway",
        description = "HTTP/JSON front for the user gRPC service"
    ),
    paths(
        crate::handlers::user_handler::authenticate,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::get_user,
    ),
    components(schemas(AuthBody, CreateBody, UpdateBody, UserIdBody, UserBody)),
    tags(
        (name = "Users", description = "User account operations")
    )
)]
pub struct ApiDoc;
