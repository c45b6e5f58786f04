//! # Database Operations
//!
//! Connection management for the PostgreSQL-backed deployment repository.
//!
//! ## Key Components
//!
//! - [`connection`] - Pooled connection handling, health checks, and
//!   idempotent schema setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use formline_core::database::DatabaseConnection;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseConnection::new().await?;
//! db.ensure_schema().await?;
//! assert!(db.health_check().await?);
//! # Ok(())
//! # }
//! ```

pub mod connection;

pub use connection::DatabaseConnection;
