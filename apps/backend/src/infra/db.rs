use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::{todos, users};
use crate::error::AppError;

/// Connect to the database behind the given URL.
/// This function does NOT create any tables.
pub async fn connect_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Create the `users` and `todos` tables from the entity definitions if they
/// do not exist yet. Runs once at process start; there is no versioned
/// migration history.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut users_table = schema.create_table_from_entity(users::Entity);
    db.execute(backend.build(users_table.if_not_exists())).await?;

    let mut todos_table = schema.create_table_from_entity(todos::Entity);
    db.execute(backend.build(todos_table.if_not_exists())).await?;

    Ok(())
}
