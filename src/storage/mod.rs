//! Storage engines that execute finalized deployment queries.
//!
//! Both engines implement
//! [`DeploymentQueryExecutor`](crate::query::DeploymentQueryExecutor) and
//! must agree on criteria semantics; the in-memory store doubles as the
//! reference implementation in tests.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryDeploymentStore;
pub use postgres::PostgresDeploymentExecutor;
