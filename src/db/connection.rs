// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use log::debug;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Default keyword store location
///
/// Path structure: {APP_DATA}/opengraph/keywords.db
pub fn get_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("opengraph").join("keywords.db"))
}

/// Create a connection pool over a database file
///
/// Pool configuration:
/// - Max 8 connections (lookups are short reads)
/// - SQLite in WAL mode
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool(db_path: &Path) -> AppResult<ConnectionPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(8)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    debug!("[DB] pool opened at {}", db_path.display());
    Ok(pool)
}

/// Create a single-connection pool over a private in-memory database
///
/// One connection only: every in-memory SQLite connection is its own database.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    Pool::builder()
        .max_size(1)
        .build(SqliteConnectionManager::memory())
        .map_err(|e| AppError::Pool(format!("Failed to create memory pool: {}", e)))
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    Connection::open_in_memory().map_err(AppError::Database)
}
