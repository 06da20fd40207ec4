use crate::config::db::db_url;
use crate::error::AppError;
use crate::infra::db::{connect_db, ensure_schema};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    database_url: Option<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { database_url: None }
    }

    /// Override the connection string (tests use `sqlite::memory:`)
    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Single entrypoint: connect + create schema
    pub async fn build(self) -> Result<AppState, AppError> {
        let url = self.database_url.unwrap_or_else(db_url);
        let conn = connect_db(&url).await?;
        ensure_schema(&conn).await?;
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
