pub mod queries;
pub mod seed;

use std::str::FromStr;

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub use queries::categories::Category;
pub use queries::questions::{NewQuestion, Question};

use sqlx::Error;

pub async fn establish_connection(path: &str) -> Result<SqlitePool, Error> {
    let options =
        SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?.create_if_missing(true);
    SqlitePool::connect_with(options).await
}

/// A private database that lives as long as the returned pool. The pool is pinned to a single
/// connection, every new SQLite connection to `:memory:` would otherwise see an empty database.
pub async fn establish_in_memory_connection() -> Result<SqlitePool, Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
