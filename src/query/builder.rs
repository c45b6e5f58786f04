//! Fluent criteria builder for deployment queries.
//!
//! [`FormDeploymentQuery`] accumulates filter predicates and ordering
//! directives through chainable methods, then hands an owned
//! [`DeploymentCriteria`] snapshot to a
//! [`DeploymentQueryExecutor`](super::DeploymentQueryExecutor) when a
//! terminal method runs. Every fluent method consumes the builder and
//! returns `Result<Self>`, so a misuse such as `asc()` with no pending
//! order-by fails at the offending call instead of at execution time.
//!
//! The builder is either accumulating, where filters and order-by calls are
//! accepted, or holding a pending order-by field, where only `asc()` or
//! `desc()` may follow. Committed state never rolls back.
//!
//! ```rust,no_run
//! # use formline_core::{FormDeploymentQuery, InMemoryDeploymentStore, Result};
//! # async fn example(store: InMemoryDeploymentStore) -> Result<()> {
//! let invoices = FormDeploymentQuery::new()
//!     .deployment_name_like("Invoice%")?
//!     .deployment_tenant_id("acme")?
//!     .order_by_deployment_time()?
//!     .desc()?
//!     .list(&store)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{FormlineError, Result};
use crate::models::FormDeployment;

use super::executor::{DeploymentCriteria, DeploymentQueryExecutor, Page};
use super::ordering::{OrderField, OrderSpec, SortDirection};
use super::predicate::{Predicate, PredicateField};

/// Fluent query over deployed form definition bundles.
///
/// Filters combine conjunctively and, apart from the tenant-scoping group,
/// may repeat. Ordering directives apply as a stable multi-key sort in the
/// order they are committed. A finalized query is reusable: terminal
/// methods borrow the builder, and executing twice against unchanged data
/// returns the same rows.
#[derive(Debug, Clone, Default)]
pub struct FormDeploymentQuery {
    predicates: Vec<Predicate>,
    ordering: Vec<OrderSpec>,
    /// `Some` while an order-by call is waiting for `asc()` or `desc()`.
    pending_order: Option<OrderField>,
}

impl FormDeploymentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only select deployments with the given deployment id.
    pub fn deployment_id(self, deployment_id: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::DeploymentId, Some(deployment_id.into()))
    }

    /// Only select deployments with the given name.
    pub fn deployment_name(self, name: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::DeploymentName, Some(name.into()))
    }

    /// Only select deployments whose name matches the given pattern, where
    /// `%` matches any run of characters and `_` matches exactly one.
    pub fn deployment_name_like(self, name_like: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::DeploymentNameLike, Some(name_like.into()))
    }

    /// Only select deployments in the given category.
    pub fn deployment_category(self, category: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::Category, Some(category.into()))
    }

    /// Only select deployments whose category is present and differs from
    /// the given one. Deployments without a category never match.
    pub fn deployment_category_not_equals(self, category: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::CategoryNotEquals, Some(category.into()))
    }

    /// Only select deployments recorded for the given tenant. Mutually
    /// exclusive with the other tenant filters.
    pub fn deployment_tenant_id(self, tenant_id: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::TenantId, Some(tenant_id.into()))
    }

    /// Only select deployments whose tenant id matches the given pattern.
    /// Mutually exclusive with the other tenant filters.
    pub fn deployment_tenant_id_like(self, tenant_id_like: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::TenantIdLike, Some(tenant_id_like.into()))
    }

    /// Only select deployments recorded without a tenant. An empty tenant
    /// id is a present value and does not match. Mutually exclusive with
    /// the other tenant filters.
    pub fn deployment_without_tenant_id(self) -> Result<Self> {
        self.push_predicate(PredicateField::WithoutTenantId, None)
    }

    /// Only select deployments containing a form definition with the given
    /// key.
    pub fn form_definition_key(self, key: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::FormDefinitionKey, Some(key.into()))
    }

    /// Only select deployments containing a form definition whose key
    /// matches the given pattern.
    pub fn form_definition_key_like(self, key_like: impl Into<String>) -> Result<Self> {
        self.push_predicate(PredicateField::FormDefinitionKeyLike, Some(key_like.into()))
    }

    /// Only select deployments with the given parent deployment id.
    pub fn parent_deployment_id(self, parent_deployment_id: impl Into<String>) -> Result<Self> {
        self.push_predicate(
            PredicateField::ParentDeploymentId,
            Some(parent_deployment_id.into()),
        )
    }

    /// Only select deployments whose parent deployment id matches the given
    /// pattern.
    pub fn parent_deployment_id_like(
        self,
        parent_deployment_id_like: impl Into<String>,
    ) -> Result<Self> {
        self.push_predicate(
            PredicateField::ParentDeploymentIdLike,
            Some(parent_deployment_id_like.into()),
        )
    }

    /// Order the results by deployment id. Must be followed by
    /// [`asc`](Self::asc) or [`desc`](Self::desc).
    pub fn order_by_deployment_id(self) -> Result<Self> {
        self.push_order_field(OrderField::DeploymentId)
    }

    /// Order the results by deployment name. Must be followed by
    /// [`asc`](Self::asc) or [`desc`](Self::desc).
    pub fn order_by_deployment_name(self) -> Result<Self> {
        self.push_order_field(OrderField::DeploymentName)
    }

    /// Order the results by deployment time. Must be followed by
    /// [`asc`](Self::asc) or [`desc`](Self::desc).
    pub fn order_by_deployment_time(self) -> Result<Self> {
        self.push_order_field(OrderField::DeploymentTime)
    }

    /// Order the results by tenant id. Must be followed by
    /// [`asc`](Self::asc) or [`desc`](Self::desc).
    pub fn order_by_tenant_id(self) -> Result<Self> {
        self.push_order_field(OrderField::TenantId)
    }

    /// Commit the pending order-by field with ascending direction.
    pub fn asc(self) -> Result<Self> {
        self.commit_direction(SortDirection::Ascending)
    }

    /// Commit the pending order-by field with descending direction.
    pub fn desc(self) -> Result<Self> {
        self.commit_direction(SortDirection::Descending)
    }

    /// The filter predicates committed so far, in call order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// The ordering directives committed so far, in call order.
    pub fn ordering(&self) -> &[OrderSpec] {
        &self.ordering
    }

    /// Snapshot the accumulated state for an executor. Fails with
    /// [`FormlineError::IncompleteQuery`] while an order-by field is still
    /// waiting for its direction.
    pub fn criteria(&self, page: Option<Page>) -> Result<DeploymentCriteria> {
        if let Some(field) = self.pending_order {
            return Err(FormlineError::IncompleteQuery { field });
        }
        Ok(DeploymentCriteria {
            predicates: self.predicates.clone(),
            ordering: self.ordering.clone(),
            page,
        })
    }

    /// Execute the query and return every matching deployment.
    pub async fn list<E>(&self, executor: &E) -> Result<Vec<FormDeployment>>
    where
        E: DeploymentQueryExecutor + ?Sized,
    {
        let criteria = self.criteria(None)?;
        executor.fetch_list(&criteria).await
    }

    /// Execute the query and return one bounded window of matching
    /// deployments, skipping `offset` rows and returning at most `limit`.
    /// An offset beyond the match set yields an empty list. Without
    /// committed ordering the window follows the executor's default order.
    pub async fn list_page<E>(
        &self,
        executor: &E,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<FormDeployment>>
    where
        E: DeploymentQueryExecutor + ?Sized,
    {
        let page = Page::new(offset, limit)?;
        let criteria = self.criteria(Some(page))?;
        executor.fetch_list(&criteria).await
    }

    /// Execute the query expecting at most one match. Returns `None` when
    /// nothing matches and fails with [`FormlineError::NonUniqueResult`]
    /// when two or more deployments match.
    pub async fn single_result<E>(&self, executor: &E) -> Result<Option<FormDeployment>>
    where
        E: DeploymentQueryExecutor + ?Sized,
    {
        let criteria = self.criteria(Some(Page::probe()))?;
        let mut matches = executor.fetch_list(&criteria).await?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(Some(matches.remove(0))),
            _ => Err(FormlineError::NonUniqueResult),
        }
    }

    /// Execute the query and return only the number of matching
    /// deployments.
    pub async fn count<E>(&self, executor: &E) -> Result<i64>
    where
        E: DeploymentQueryExecutor + ?Sized,
    {
        let criteria = self.criteria(None)?;
        executor.fetch_count(&criteria).await
    }

    fn push_predicate(mut self, field: PredicateField, value: Option<String>) -> Result<Self> {
        if let Some(pending) = self.pending_order {
            return Err(FormlineError::InvalidQueryState {
                message: format!(
                    "cannot filter by {field} while order by {pending} is waiting for asc() or desc()"
                ),
            });
        }
        if field.is_tenant_scoping() {
            if let Some(existing) = self
                .predicates
                .iter()
                .find(|predicate| predicate.field().is_tenant_scoping())
            {
                return Err(FormlineError::InvalidQueryState {
                    message: format!(
                        "tenant filter {field} conflicts with already committed {}",
                        existing.field()
                    ),
                });
            }
        }
        self.predicates.push(match value {
            Some(value) => Predicate::with_value(field, value),
            None => Predicate::without_value(field),
        });
        Ok(self)
    }

    fn push_order_field(mut self, field: OrderField) -> Result<Self> {
        if let Some(pending) = self.pending_order {
            return Err(FormlineError::InvalidQueryState {
                message: format!(
                    "cannot order by {field} while order by {pending} is waiting for asc() or desc()"
                ),
            });
        }
        self.pending_order = Some(field);
        Ok(self)
    }

    fn commit_direction(mut self, direction: SortDirection) -> Result<Self> {
        let keyword = match direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        match self.pending_order.take() {
            Some(field) => {
                self.ordering.push(OrderSpec::new(field, direction));
                Ok(self)
            }
            None => Err(FormlineError::InvalidQueryState {
                message: format!("{keyword}() requires a preceding order-by call"),
            }),
        }
    }
}
