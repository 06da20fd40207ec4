use actix_web::{web, HttpResponse};
use lazy_regex::regex_is_match;
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::repos::users::{self, User};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
        }
    }
}

/// Reject malformed email addresses before any database access.
fn validate_email(email: &str) -> Result<(), AppError> {
    if regex_is_match!(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$", email) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            format!("'{email}' is not a valid email address"),
        ))
    }
}

async fn create_user(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    validate_email(&payload.email)?;

    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            // Email uniqueness is pre-checked here; username uniqueness
            // relies on the storage constraint only.
            if users::find_user_by_email(txn, &payload.email).await?.is_some() {
                return Err(AppError::conflict(
                    ErrorCode::UniqueEmail,
                    "Email already registered".to_string(),
                ));
            }

            users::create_user(txn, &payload.username, &payload.email)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

async fn get_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = with_txn(&app_state, move |txn| {
        Box::pin(async move { users::list_users(txn).await.map_err(AppError::from) })
    })
    .await?;

    let out: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(out))
}

async fn get_user(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            users::find_user_by_id(txn, user_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(ErrorCode::UserNotFound, "User not found".to_string())
                })
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::post().to(create_user))
            .route(web::get().to(get_users)),
    )
    .service(web::resource("/users/{user_id}").route(web::get().to(get_user)));
}
