use actix_web::{web, HttpResponse};
use shared_types::{CreateUserRequest, UserResponse, ValidationIssue};
use std::sync::Arc;
use tracing::info;

use crate::database::users as users_db;
use crate::database::Database;
use crate::errors::{ensure_valid, ApiError, ApiResult};
use crate::helpers::validation;

/// Signup. The stored password is never echoed back.
pub async fn create_user(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();

    let mut issues = validation::validate_new_user(&request);
    if users_db::get_user_by_username(&db, &request.username)
        .await
        .is_some()
    {
        issues.push(ValidationIssue::new("username", "Username is already taken"));
    }
    ensure_valid(issues)?;

    let user = users_db::create_user(&db, request).await;
    info!("Created user {}", user.id);

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

pub async fn get_user(
    db: web::Data<Arc<Database>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = path.into_inner();

    let user = users_db::get_user(&db, &user_id)
        .await
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
