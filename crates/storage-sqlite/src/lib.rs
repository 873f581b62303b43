//! SQLite storage implementation for metalfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `metalfolio-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - The purchases repository and its row models
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist; everything above it works with traits.

pub mod db;
pub mod errors;
pub mod purchases;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from metalfolio-core for convenience
pub use metalfolio_core::errors::{DatabaseError, Error, Result};
