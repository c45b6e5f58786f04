//! Error types for the deployment repository core.
//!
//! Builder misuse surfaces as a typed [`FormlineError`] from the offending
//! call rather than at execution time, so a broken fluent chain fails fast
//! at the call site. Storage failures pass through unchanged.

use crate::query::OrderField;
use thiserror::Error;

/// Errors surfaced by the deployment repository core.
#[derive(Debug, Error)]
pub enum FormlineError {
    /// A fluent method was called in a builder state that forbids it, such
    /// as a direction with no pending order-by field or a second
    /// tenant-scoping filter.
    #[error("Invalid query state: {message}")]
    InvalidQueryState { message: String },

    /// A terminal method fired while an order-by field was still waiting
    /// for its direction.
    #[error("Incomplete query: order by {field} must be followed by asc() or desc()")]
    IncompleteQuery { field: OrderField },

    /// A single-result execution matched more than one deployment.
    #[error("Query returned more than one result where at most one was expected")]
    NonUniqueResult,

    /// Malformed caller input, such as negative pagination bounds.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Malformed environment configuration.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Error raised by the storage engine, passed through unchanged.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, FormlineError>;
