//! In-memory deployment store for tests and embedded use.
//!
//! Resolves the same criteria semantics as the PostgreSQL executor without
//! a database: conjunctive predicates, SQL-style comparison against absent
//! values, like patterns with SQL wildcard meanings, and stable multi-key
//! ordering with absent values last on ascending keys. Without committed
//! ordering, results come back in insertion order.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::cmp::Ordering;

use crate::error::Result;
use crate::models::{FormDefinition, FormDeployment};
use crate::query::{
    DeploymentCriteria, DeploymentQueryExecutor, FilterOperator, OrderField, OrderSpec, Predicate,
    PredicateField, SortDirection,
};

/// Deployment store backed by process memory.
///
/// Shared-reference insertion makes it usable behind an `Arc` from many
/// tasks; queries see a consistent snapshot taken under the read lock.
#[derive(Debug, Default)]
pub struct InMemoryDeploymentStore {
    deployments: RwLock<Vec<FormDeployment>>,
    definitions: RwLock<Vec<FormDefinition>>,
}

impl InMemoryDeploymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deployment record.
    pub fn insert_deployment(&self, deployment: FormDeployment) {
        self.deployments.write().push(deployment);
    }

    /// Add a form definition record, usually alongside its deployment.
    pub fn insert_definition(&self, definition: FormDefinition) {
        self.definitions.write().push(definition);
    }

    /// Number of stored deployments, unfiltered.
    pub fn deployment_count(&self) -> usize {
        self.deployments.read().len()
    }

    fn matching(&self, criteria: &DeploymentCriteria) -> Vec<FormDeployment> {
        let definitions = self.definitions.read();
        let mut matches: Vec<FormDeployment> = self
            .deployments
            .read()
            .iter()
            .filter(|deployment| {
                criteria
                    .predicates
                    .iter()
                    .all(|predicate| matches_predicate(predicate, deployment, &definitions))
            })
            .cloned()
            .collect();
        if !criteria.ordering.is_empty() {
            matches.sort_by(|a, b| compare_by_keys(a, b, &criteria.ordering));
        }
        matches
    }
}

#[async_trait]
impl DeploymentQueryExecutor for InMemoryDeploymentStore {
    async fn fetch_list(&self, criteria: &DeploymentCriteria) -> Result<Vec<FormDeployment>> {
        let mut matches = self.matching(criteria);
        if let Some(page) = criteria.page {
            matches = matches
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .collect();
        }
        Ok(matches)
    }

    async fn fetch_count(&self, criteria: &DeploymentCriteria) -> Result<i64> {
        let definitions = self.definitions.read();
        let count = self
            .deployments
            .read()
            .iter()
            .filter(|deployment| {
                criteria
                    .predicates
                    .iter()
                    .all(|predicate| matches_predicate(predicate, deployment, &definitions))
            })
            .count();
        Ok(count as i64)
    }
}

fn matches_predicate(
    predicate: &Predicate,
    deployment: &FormDeployment,
    definitions: &[FormDefinition],
) -> bool {
    match predicate.field() {
        PredicateField::FormDefinitionKey | PredicateField::FormDefinitionKeyLike => {
            definitions.iter().any(|definition| {
                definition.deployment_id == deployment.deployment_id
                    && text_matches(
                        predicate.operator(),
                        predicate.value(),
                        Some(&definition.definition_key),
                    )
            })
        }
        field => text_matches(
            predicate.operator(),
            predicate.value(),
            column_value(field, deployment),
        ),
    }
}

fn column_value<'a>(field: PredicateField, deployment: &'a FormDeployment) -> Option<&'a str> {
    match field {
        PredicateField::DeploymentId => Some(&deployment.deployment_id),
        PredicateField::DeploymentName | PredicateField::DeploymentNameLike => {
            deployment.name.as_deref()
        }
        PredicateField::Category | PredicateField::CategoryNotEquals => {
            deployment.category.as_deref()
        }
        PredicateField::TenantId
        | PredicateField::TenantIdLike
        | PredicateField::WithoutTenantId => deployment.tenant_id.as_deref(),
        PredicateField::ParentDeploymentId | PredicateField::ParentDeploymentIdLike => {
            deployment.parent_deployment_id.as_deref()
        }
        PredicateField::FormDefinitionKey | PredicateField::FormDefinitionKeyLike => None,
    }
}

/// SQL comparison behavior: an absent column value satisfies only the
/// null check, never a comparison, `NotEquals` included.
fn text_matches(operator: FilterOperator, expected: Option<&str>, actual: Option<&str>) -> bool {
    match operator {
        FilterOperator::IsNull => actual.is_none(),
        FilterOperator::Equals => matches!((expected, actual), (Some(e), Some(a)) if a == e),
        FilterOperator::NotEquals => matches!((expected, actual), (Some(e), Some(a)) if a != e),
        FilterOperator::Like => {
            matches!((expected, actual), (Some(pattern), Some(a)) if like_match(pattern, a))
        }
    }
}

/// Match `text` against a like pattern with the SQL wildcard meanings:
/// `%` matches any run of characters, including none, and `_` matches
/// exactly one. Every other character matches literally. Patterns arrive
/// verbatim, so this mirrors what the same pattern does when bound into
/// a `LIKE` clause.
fn like_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let mut p = 0;
    let mut t = 0;
    // Last `%` seen and the text position its run currently ends at,
    // so a failed literal match can widen the run and retry.
    let mut resume: Option<(usize, usize)> = None;
    while t < text.len() {
        if p < pattern.len() && pattern[p] == '%' {
            resume = Some((p, t));
            p += 1;
        } else if p < pattern.len() && (pattern[p] == '_' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if let Some((star, start)) = resume {
            resume = Some((star, start + 1));
            p = star + 1;
            t = start + 1;
        } else {
            return false;
        }
    }
    while p < pattern.len() && pattern[p] == '%' {
        p += 1;
    }
    p == pattern.len()
}

fn compare_by_keys(a: &FormDeployment, b: &FormDeployment, ordering: &[OrderSpec]) -> Ordering {
    for spec in ordering {
        let by_key = match spec.field() {
            OrderField::DeploymentId => a.deployment_id.cmp(&b.deployment_id),
            OrderField::DeploymentName => compare_nullable(a.name.as_deref(), b.name.as_deref()),
            OrderField::DeploymentTime => a.deployed_at.cmp(&b.deployed_at),
            OrderField::TenantId => {
                compare_nullable(a.tenant_id.as_deref(), b.tenant_id.as_deref())
            }
        };
        let directed = match spec.direction() {
            SortDirection::Ascending => by_key,
            SortDirection::Descending => by_key.reverse(),
        };
        if directed != Ordering::Equal {
            return directed;
        }
    }
    Ordering::Equal
}

/// Ascending comparison with absent values last, matching how PostgreSQL
/// places NULLs by default. Descending keys reverse this, so absent values
/// come first there.
fn compare_nullable(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(right),
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
    }
}
