//! Global database connection pool.

use once_cell::sync::OnceCell;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

static DB_POOL: OnceCell<DatabaseConnection> = OnceCell::new();

/// Connects the global pool. Must be called once at startup before any
/// handler runs.
pub async fn init_db(database_url: String) {
    let pool_config = crate::app_config::database();

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(pool_config.max_connections)
        .min_connections(pool_config.min_connections);

    let pool = Database::connect(opt)
        .await
        .expect("Failed to connect to the database.");

    DB_POOL
        .set(pool)
        .expect("init_db() called more than once.");

    log::info!("Database pool initialized");
}

/// Returns the global connection pool.
///
/// Panics if `init_db` has not run.
pub fn get_db_pool() -> &'static DatabaseConnection {
    DB_POOL
        .get()
        .expect("Database pool accessed before init_db().")
}
