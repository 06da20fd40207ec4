use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::repos::todos::{self, CreateTodo, Todo, UpdateTodo};
use crate::repos::users;
use crate::state::app_state::AppState;

/// Body for creation and full replacement (PUT). Omitted fields fall back to
/// their defaults, so a replace always resets `description` and `done`.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl From<CreateTodoRequest> for CreateTodo {
    fn from(value: CreateTodoRequest) -> Self {
        Self {
            title: value.title,
            description: value.description,
            done: value.done,
        }
    }
}

/// Body for partial update (PATCH).
///
/// Option<Option<T>> via double_option distinguishes:
/// - None = field not provided (leave unchanged)
/// - Some(None) = field provided as null (rejected; no column is nullable)
/// - Some(Some(value)) = field provided with value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub done: Option<Option<bool>>,
}

impl UpdateTodoRequest {
    fn into_update(self) -> Result<UpdateTodo, AppError> {
        Ok(UpdateTodo {
            title: reject_null(self.title, "title")?,
            description: reject_null(self.description, "description")?,
            done: reject_null(self.done, "done")?,
        })
    }
}

fn reject_null<T>(field: Option<Option<T>>, name: &str) -> Result<Option<T>, AppError> {
    match field {
        Some(Some(value)) => Ok(Some(value)),
        Some(None) => Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("Field '{name}' cannot be null"),
        )),
        None => Ok(None),
    }
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub owner_id: i32,
}

impl From<Todo> for TodoResponse {
    fn from(value: Todo) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            done: value.done,
            owner_id: value.owner_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub message: String,
}

fn user_not_found() -> AppError {
    AppError::not_found(ErrorCode::UserNotFound, "User not found".to_string())
}

fn todo_not_found() -> AppError {
    AppError::not_found(ErrorCode::TodoNotFound, "Todo not found".to_string())
}

async fn create_todo(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let payload = body.into_inner();

    let todo = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            if users::find_user_by_id(txn, user_id).await?.is_none() {
                return Err(user_not_found());
            }

            todos::create_todo(txn, user_id, payload.into())
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

async fn get_user_todos(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    let todos = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            if users::find_user_by_id(txn, user_id).await?.is_none() {
                return Err(user_not_found());
            }

            todos::list_todos_for_owner(txn, user_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let out: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
    Ok(HttpResponse::Ok().json(out))
}

async fn get_todo(
    path: web::Path<(i32, i32)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (user_id, todo_id) = path.into_inner();

    let todo = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            todos::find_todo(txn, user_id, todo_id)
                .await?
                .ok_or_else(todo_not_found)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

async fn replace_todo(
    path: web::Path<(i32, i32)>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    let (user_id, todo_id) = path.into_inner();
    let payload = body.into_inner();

    let todo = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            todos::replace_todo(txn, user_id, todo_id, payload.into())
                .await?
                .ok_or_else(todo_not_found)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

async fn patch_todo(
    path: web::Path<(i32, i32)>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    let (user_id, todo_id) = path.into_inner();
    let update = body.into_inner().into_update()?;

    let todo = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            todos::update_todo(txn, user_id, todo_id, update)
                .await?
                .ok_or_else(todo_not_found)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

async fn delete_todo(
    path: web::Path<(i32, i32)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (user_id, todo_id) = path.into_inner();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            if todos::delete_todo(txn, user_id, todo_id).await? {
                Ok(())
            } else {
                Err(todo_not_found())
            }
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeleteTodoResponse {
        message: format!("Todo {todo_id} deleted for user {user_id}"),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/{user_id}/todos")
            .route(web::post().to(create_todo))
            .route(web::get().to(get_user_todos)),
    )
    .service(
        web::resource("/users/{user_id}/todos/{todo_id}")
            .route(web::get().to(get_todo))
            .route(web::put().to(replace_todo))
            .route(web::patch().to(patch_todo))
            .route(web::delete().to(delete_todo)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_defaults_description_and_done() {
        let payload: CreateTodoRequest = serde_json::from_str(r#"{"title": "buy milk"}"#).unwrap();
        assert_eq!(payload.title, "buy milk");
        assert_eq!(payload.description, "");
        assert!(!payload.done);
    }

    #[test]
    fn update_body_distinguishes_absent_from_null() {
        let absent: UpdateTodoRequest = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert_eq!(absent.title, None);
        assert_eq!(absent.done, Some(Some(true)));

        let null: UpdateTodoRequest = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(null.title, Some(None));
        assert!(null.into_update().is_err());
    }

    #[test]
    fn empty_update_body_is_a_noop() {
        let empty: UpdateTodoRequest = serde_json::from_str("{}").unwrap();
        let update = empty.into_update().unwrap();
        assert!(update.is_empty());
    }
}
