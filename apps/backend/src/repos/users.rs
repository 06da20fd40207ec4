//! User repository functions (generic over ConnectionTrait).

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set};

use crate::entities::users;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

/// User domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    email: &str,
) -> Result<User, DomainError> {
    let user_active = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        email: Set(email.to_string()),
    };

    let user = user_active.insert(conn).await.map_err(|e| {
        // Map unique constraint violations to specific conflicts
        let msg = e.to_string();
        let lower = msg.to_lowercase();
        if lower.contains("unique") || lower.contains("duplicate") {
            if lower.contains("username") {
                DomainError::conflict(ConflictKind::UniqueUsername, "Username already taken")
            } else {
                DomainError::conflict(ConflictKind::UniqueEmail, "Email already registered")
            }
        } else {
            DomainError::infra(
                InfraErrorKind::Other("Database error".to_string()),
                format!("Failed to create user: {msg}"),
            )
        }
    })?;

    Ok(User::from(user))
}

pub async fn find_user_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
        .map_err(query_err)?;

    Ok(user.map(User::from))
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
) -> Result<Option<User>, DomainError> {
    let user = users::Entity::find_by_id(user_id)
        .one(conn)
        .await
        .map_err(query_err)?;

    Ok(user.map(User::from))
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    let users = users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
        .map_err(query_err)?;

    Ok(users.into_iter().map(User::from).collect())
}

fn query_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::infra(
        InfraErrorKind::Other("Database error".to_string()),
        format!("Failed to query users: {e}"),
    )
}

// Conversion between SeaORM model and domain model

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
        }
    }
}
