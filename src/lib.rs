#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Formline Core Rust
//!
//! High-performance Rust core for the Formline form engine's deployment
//! repository.
//!
//! ## Overview
//!
//! Formline deploys forms in immutable bundles: each deployment carries the
//! versioned form definitions it shipped with, plus its name, category,
//! tenant and parent-deployment attributes. This crate owns the repository
//! side of that model, centered on a fluent, criteria-style query API over
//! deployment records in the tradition of ActiveRecord scopes.
//!
//! ## Architecture
//!
//! Queries accumulate in a [`query::FormDeploymentQuery`] builder that
//! validates every fluent call as it happens, then execute through the
//! [`query::DeploymentQueryExecutor`] boundary as an owned criteria
//! snapshot. The crate ships two executors with identical semantics: a
//! PostgreSQL translation built on sqlx and an in-memory store for tests
//! and embedded use.
//!
//! ## Module Organization
//!
//! - [`query`] - fluent builder, predicates, ordering, executor boundary
//! - [`storage`] - PostgreSQL and in-memory executors
//! - [`models`] - deployment and form definition records
//! - [`database`] - connection pooling and schema setup
//! - [`config`] - configuration management
//! - [`error`] - structured error handling
//! - [`logging`] - environment-aware structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formline_core::{FormDeploymentQuery, InMemoryDeploymentStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryDeploymentStore::new();
//!
//! let recent_acme = FormDeploymentQuery::new()
//!     .deployment_tenant_id("acme")?
//!     .deployment_category_not_equals("archived")?
//!     .order_by_deployment_time()?
//!     .desc()?
//!     .list_page(&store, 0, 20)
//!     .await?;
//!
//! println!("{} recent acme deployments", recent_acme.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod storage;

// Re-export core types for easy access
pub use config::RepositoryConfig;
pub use database::DatabaseConnection;
pub use error::{FormlineError, Result};
pub use models::{FormDefinition, FormDeployment, NewFormDefinition, NewFormDeployment};
pub use query::{
    DeploymentCriteria, DeploymentQueryExecutor, FilterOperator, FormDeploymentQuery, OrderField,
    OrderSpec, Page, Predicate, PredicateField, SortDirection,
};
pub use storage::{InMemoryDeploymentStore, PostgresDeploymentExecutor};
