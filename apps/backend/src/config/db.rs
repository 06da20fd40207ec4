use std::env;

/// Default connection string: an SQLite file in the working directory,
/// created on first use. Deleting the file resets the whole database.
const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db?mode=rwc";

/// Resolve the database connection string from the environment.
pub fn db_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::{db_url, DEFAULT_DATABASE_URL};

    // Single test to avoid parallel mutation of DATABASE_URL.
    #[test]
    fn db_url_resolution() {
        env::remove_var("DATABASE_URL");
        assert_eq!(db_url(), DEFAULT_DATABASE_URL);

        env::set_var("DATABASE_URL", "sqlite::memory:");
        assert_eq!(db_url(), "sqlite::memory:");
        env::remove_var("DATABASE_URL");
    }
}
