//! Execution boundary between the fluent builder and storage engines.
//!
//! A finalized query crosses this boundary as an owned
//! [`DeploymentCriteria`] snapshot, so executors never see builder state and
//! the builder never sees storage detail. Anything that can resolve criteria
//! against a deployment store implements [`DeploymentQueryExecutor`]; the
//! crate ships a PostgreSQL executor and an in-memory store, and callers can
//! bring their own.

use crate::error::{FormlineError, Result};
use crate::models::FormDeployment;
use async_trait::async_trait;
use serde::Serialize;

use super::ordering::OrderSpec;
use super::predicate::Predicate;

/// Bounded result window: skip `offset` matching rows, return at most
/// `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    /// Validate and build a result window. The offset must be zero or
    /// positive and the limit strictly positive.
    pub fn new(offset: i64, limit: i64) -> Result<Self> {
        if offset < 0 {
            return Err(FormlineError::InvalidArgument {
                message: format!("page offset must not be negative, got {offset}"),
            });
        }
        if limit <= 0 {
            return Err(FormlineError::InvalidArgument {
                message: format!("page limit must be positive, got {limit}"),
            });
        }
        Ok(Self { offset, limit })
    }

    /// Two-row window used by single-result execution: one row over the
    /// expected cardinality is enough to prove non-uniqueness.
    pub(crate) fn probe() -> Self {
        Self { offset: 0, limit: 2 }
    }

    pub fn offset(self) -> i64 {
        self.offset
    }

    pub fn limit(self) -> i64 {
        self.limit
    }
}

/// Owned snapshot of a finalized query.
///
/// Predicates combine conjunctively. Ordering directives apply as a stable
/// multi-key sort in commit order; when empty, the executor's default order
/// applies. `page` bounds the result window of a list execution and is
/// absent for unbounded lists and counts.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentCriteria {
    pub predicates: Vec<Predicate>,
    pub ordering: Vec<OrderSpec>,
    pub page: Option<Page>,
}

/// Storage engine collaborator that resolves finalized deployment queries.
///
/// Implementations must evaluate every committed predicate, never silently
/// drop one, and must leave the criteria reusable: executing the same
/// criteria twice against unchanged data returns the same rows.
#[async_trait]
pub trait DeploymentQueryExecutor: Send + Sync {
    /// Fetch the deployments matching the criteria, ordered and windowed.
    async fn fetch_list(&self, criteria: &DeploymentCriteria) -> Result<Vec<FormDeployment>>;

    /// Count the deployments matching the criteria without materializing
    /// them. Ordering and paging in the criteria are ignored.
    async fn fetch_count(&self, criteria: &DeploymentCriteria) -> Result<i64>;
}
