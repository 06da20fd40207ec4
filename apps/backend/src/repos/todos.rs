//! Todo repository functions (generic over ConnectionTrait).
//!
//! Every lookup filters on both `owner_id` and `id`; a todo id alone is never
//! enough to address a row, so a mismatched owner/todo pair reads as absent.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet,
    QueryFilter, QueryOrder, Set};

use crate::entities::todos;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Todo domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub owner_id: i32,
}

/// Input for creation and full replacement: all mutable fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    pub done: bool,
}

/// Input for partial update: only fields that are `Some` are applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateTodo {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }
}

pub async fn create_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    todo: CreateTodo,
) -> Result<Todo, DomainError> {
    let todo_active = todos::ActiveModel {
        id: NotSet,
        title: Set(todo.title),
        description: Set(todo.description),
        done: Set(todo.done),
        owner_id: Set(owner_id),
    };

    let model = todo_active.insert(conn).await.map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Database error".to_string()),
            format!("Failed to create todo: {e}"),
        )
    })?;

    Ok(Todo::from(model))
}

pub async fn list_todos_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
) -> Result<Vec<Todo>, DomainError> {
    let todos = todos::Entity::find()
        .filter(todos::Column::OwnerId.eq(owner_id))
        .order_by_asc(todos::Column::Id)
        .all(conn)
        .await
        .map_err(query_err)?;

    Ok(todos.into_iter().map(Todo::from).collect())
}

pub async fn find_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    todo_id: i32,
) -> Result<Option<Todo>, DomainError> {
    let todo = find_model(conn, owner_id, todo_id).await?;
    Ok(todo.map(Todo::from))
}

/// Full replacement: overwrites title, description and done unconditionally.
/// Returns `None` if the (owner, todo) pair does not exist.
pub async fn replace_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    todo_id: i32,
    todo: CreateTodo,
) -> Result<Option<Todo>, DomainError> {
    let Some(model) = find_model(conn, owner_id, todo_id).await? else {
        return Ok(None);
    };

    let mut active: todos::ActiveModel = model.into();
    active.title = Set(todo.title);
    active.description = Set(todo.description);
    active.done = Set(todo.done);

    let model = active.update(conn).await.map_err(update_err)?;
    Ok(Some(Todo::from(model)))
}

/// Partial update: applies only the fields supplied in `update`.
/// Returns `None` if the (owner, todo) pair does not exist.
pub async fn update_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    todo_id: i32,
    update: UpdateTodo,
) -> Result<Option<Todo>, DomainError> {
    let Some(model) = find_model(conn, owner_id, todo_id).await? else {
        return Ok(None);
    };

    // An update with no fields is a no-op; skip the statement entirely.
    if update.is_empty() {
        return Ok(Some(Todo::from(model)));
    }

    let mut active: todos::ActiveModel = model.into();
    if let Some(title) = update.title {
        active.title = Set(title);
    }
    if let Some(description) = update.description {
        active.description = Set(description);
    }
    if let Some(done) = update.done {
        active.done = Set(done);
    }

    let model = active.update(conn).await.map_err(update_err)?;
    Ok(Some(Todo::from(model)))
}

/// Returns `true` if a row was deleted, `false` if the pair was absent.
pub async fn delete_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    todo_id: i32,
) -> Result<bool, DomainError> {
    let Some(model) = find_model(conn, owner_id, todo_id).await? else {
        return Ok(false);
    };

    model.delete(conn).await.map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Database error".to_string()),
            format!("Failed to delete todo: {e}"),
        )
    })?;

    Ok(true)
}

async fn find_model<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    todo_id: i32,
) -> Result<Option<todos::Model>, DomainError> {
    todos::Entity::find()
        .filter(todos::Column::Id.eq(todo_id))
        .filter(todos::Column::OwnerId.eq(owner_id))
        .one(conn)
        .await
        .map_err(query_err)
}

fn query_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::infra(
        InfraErrorKind::Other("Database error".to_string()),
        format!("Failed to query todos: {e}"),
    )
}

fn update_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::infra(
        InfraErrorKind::Other("Database error".to_string()),
        format!("Failed to update todo: {e}"),
    )
}

// Conversion between SeaORM model and domain model

impl From<todos::Model> for Todo {
    fn from(model: todos::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            done: model.done,
            owner_id: model.owner_id,
        }
    }
}
