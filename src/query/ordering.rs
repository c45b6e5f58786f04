//! Ordering directives for deployment queries.

use serde::Serialize;
use std::fmt;

/// Deployment attributes a query can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderField {
    DeploymentId,
    DeploymentName,
    DeploymentTime,
    TenantId,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DeploymentId => "deployment_id",
            Self::DeploymentName => "deployment_name",
            Self::DeploymentTime => "deployment_time",
            Self::TenantId => "tenant_id",
        };
        write!(f, "{label}")
    }
}

/// Sort direction for one ordering directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        };
        write!(f, "{label}")
    }
}

/// One completed ordering directive.
///
/// A direction is required at construction, so a committed `OrderSpec` can
/// never be direction-less; an order-by field still waiting for `asc()` or
/// `desc()` lives in the builder state instead. Directives apply as a stable
/// multi-key sort in the order they were committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSpec {
    field: OrderField,
    direction: SortDirection,
}

impl OrderSpec {
    pub(crate) fn new(field: OrderField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn field(&self) -> OrderField {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}
