//! PostgreSQL execution of deployment criteria.
//!
//! The only module that maps predicate attributes onto table columns and
//! SQL operators. Criteria render through sqlx's `QueryBuilder` with every
//! comparison value bound as a parameter; like patterns are bound verbatim,
//! so `%` and `_` keep their SQL wildcard meanings and nothing is escaped.
//! List queries append a deployment id tie-break unless the caller already
//! ordered by deployment id, which keeps paged walks over equal sort keys
//! total.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::error::Result;
use crate::models::FormDeployment;
use crate::query::{
    DeploymentCriteria, DeploymentQueryExecutor, OrderField, Predicate, PredicateField,
    SortDirection,
};

/// Executes deployment criteria against the PostgreSQL schema.
#[derive(Debug, Clone)]
pub struct PostgresDeploymentExecutor {
    pool: PgPool,
}

impl PostgresDeploymentExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeploymentQueryExecutor for PostgresDeploymentExecutor {
    async fn fetch_list(&self, criteria: &DeploymentCriteria) -> Result<Vec<FormDeployment>> {
        let mut query = list_query(criteria);
        debug!(
            predicates = criteria.predicates.len(),
            ordered = !criteria.ordering.is_empty(),
            paged = criteria.page.is_some(),
            "executing deployment list query"
        );
        let deployments = query
            .build_query_as::<FormDeployment>()
            .fetch_all(&self.pool)
            .await?;
        Ok(deployments)
    }

    async fn fetch_count(&self, criteria: &DeploymentCriteria) -> Result<i64> {
        let mut query = count_query(criteria);
        debug!(
            predicates = criteria.predicates.len(),
            "executing deployment count query"
        );
        let count: i64 = query.build_query_scalar().fetch_one(&self.pool).await?;
        Ok(count)
    }
}

fn list_query(criteria: &DeploymentCriteria) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        "SELECT formline_form_deployments.* FROM formline_form_deployments",
    );
    push_predicates(&mut query, criteria);
    push_ordering(&mut query, criteria);
    if let Some(page) = criteria.page {
        query.push(" LIMIT ");
        query.push_bind(page.limit());
        query.push(" OFFSET ");
        query.push_bind(page.offset());
    }
    query
}

fn count_query(criteria: &DeploymentCriteria) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT COUNT(*) FROM formline_form_deployments");
    push_predicates(&mut query, criteria);
    query
}

fn push_predicates(query: &mut QueryBuilder<'static, Postgres>, criteria: &DeploymentCriteria) {
    for (index, predicate) in criteria.predicates.iter().enumerate() {
        query.push(if index == 0 { " WHERE " } else { " AND " });
        push_predicate(query, predicate);
    }
}

fn push_predicate(query: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate) {
    match predicate.field() {
        PredicateField::DeploymentId => push_column_compare(query, "deployment_id", " = ", predicate),
        PredicateField::DeploymentName => push_column_compare(query, "name", " = ", predicate),
        PredicateField::DeploymentNameLike => push_column_compare(query, "name", " LIKE ", predicate),
        PredicateField::Category => push_column_compare(query, "category", " = ", predicate),
        PredicateField::CategoryNotEquals => push_column_compare(query, "category", " <> ", predicate),
        PredicateField::TenantId => push_column_compare(query, "tenant_id", " = ", predicate),
        PredicateField::TenantIdLike => push_column_compare(query, "tenant_id", " LIKE ", predicate),
        PredicateField::WithoutTenantId => {
            query.push("formline_form_deployments.tenant_id IS NULL");
        }
        PredicateField::FormDefinitionKey => push_definition_key_match(query, " = ", predicate),
        PredicateField::FormDefinitionKeyLike => {
            push_definition_key_match(query, " LIKE ", predicate)
        }
        PredicateField::ParentDeploymentId => {
            push_column_compare(query, "parent_deployment_id", " = ", predicate)
        }
        PredicateField::ParentDeploymentIdLike => {
            push_column_compare(query, "parent_deployment_id", " LIKE ", predicate)
        }
    }
}

fn push_column_compare(
    query: &mut QueryBuilder<'static, Postgres>,
    column: &str,
    comparator: &str,
    predicate: &Predicate,
) {
    query.push("formline_form_deployments.");
    query.push(column);
    query.push(comparator);
    query.push_bind(predicate.value().unwrap_or_default().to_string());
}

/// Deployment-level filter on the definitions a deployment ships: match
/// when any contained form definition satisfies the key comparison.
fn push_definition_key_match(
    query: &mut QueryBuilder<'static, Postgres>,
    comparator: &str,
    predicate: &Predicate,
) {
    query.push(
        "EXISTS (SELECT 1 FROM formline_form_definitions \
         WHERE formline_form_definitions.deployment_id = formline_form_deployments.deployment_id \
         AND formline_form_definitions.definition_key",
    );
    query.push(comparator);
    query.push_bind(predicate.value().unwrap_or_default().to_string());
    query.push(")");
}

fn push_ordering(query: &mut QueryBuilder<'static, Postgres>, criteria: &DeploymentCriteria) {
    query.push(" ORDER BY ");
    let mut wrote_key = false;
    for spec in &criteria.ordering {
        if wrote_key {
            query.push(", ");
        }
        query.push("formline_form_deployments.");
        query.push(order_column(spec.field()));
        query.push(match spec.direction() {
            SortDirection::Ascending => " ASC",
            SortDirection::Descending => " DESC",
        });
        wrote_key = true;
    }
    let ordered_by_id = criteria
        .ordering
        .iter()
        .any(|spec| spec.field() == OrderField::DeploymentId);
    if !ordered_by_id {
        if wrote_key {
            query.push(", ");
        }
        query.push("formline_form_deployments.deployment_id ASC");
    }
}

fn order_column(field: OrderField) -> &'static str {
    match field {
        OrderField::DeploymentId => "deployment_id",
        OrderField::DeploymentName => "name",
        OrderField::DeploymentTime => "deployed_at",
        OrderField::TenantId => "tenant_id",
    }
}
