//! Filter predicates for deployment queries.
//!
//! A [`Predicate`] is one committed filter condition: the deployment
//! attribute it targets, the comparison operator that attribute implies, and
//! the comparison value. Predicates are created by the fluent filter methods
//! on [`FormDeploymentQuery`](crate::query::FormDeploymentQuery) and applied
//! conjunctively at execution time; they are immutable once committed.

use serde::Serialize;
use std::fmt;

/// Attribute identifiers for deployment filter predicates.
///
/// Each variant corresponds to exactly one fluent filter method. The
/// comparison operator is implied by the variant, so a `like` match on a
/// column is a different attribute than an exact match on the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredicateField {
    DeploymentId,
    DeploymentName,
    DeploymentNameLike,
    Category,
    CategoryNotEquals,
    TenantId,
    TenantIdLike,
    WithoutTenantId,
    FormDefinitionKey,
    FormDefinitionKeyLike,
    ParentDeploymentId,
    ParentDeploymentIdLike,
}

impl PredicateField {
    /// The comparison operator this attribute is filtered with.
    pub fn operator(self) -> FilterOperator {
        match self {
            Self::DeploymentId
            | Self::DeploymentName
            | Self::Category
            | Self::TenantId
            | Self::FormDefinitionKey
            | Self::ParentDeploymentId => FilterOperator::Equals,
            Self::DeploymentNameLike
            | Self::TenantIdLike
            | Self::FormDefinitionKeyLike
            | Self::ParentDeploymentIdLike => FilterOperator::Like,
            Self::CategoryNotEquals => FilterOperator::NotEquals,
            Self::WithoutTenantId => FilterOperator::IsNull,
        }
    }

    /// Whether this attribute scopes tenant visibility. At most one
    /// tenant-scoping predicate may be committed per query.
    pub fn is_tenant_scoping(self) -> bool {
        matches!(
            self,
            Self::TenantId | Self::TenantIdLike | Self::WithoutTenantId
        )
    }
}

impl fmt::Display for PredicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DeploymentId => "deployment_id",
            Self::DeploymentName => "deployment_name",
            Self::DeploymentNameLike => "deployment_name_like",
            Self::Category => "category",
            Self::CategoryNotEquals => "category_not_equals",
            Self::TenantId => "tenant_id",
            Self::TenantIdLike => "tenant_id_like",
            Self::WithoutTenantId => "without_tenant_id",
            Self::FormDefinitionKey => "form_definition_key",
            Self::FormDefinitionKeyLike => "form_definition_key_like",
            Self::ParentDeploymentId => "parent_deployment_id",
            Self::ParentDeploymentIdLike => "parent_deployment_id_like",
        };
        write!(f, "{label}")
    }
}

/// Comparison operators a predicate can carry.
///
/// `Equals`, `NotEquals` and `Like` compare against a present column value
/// only; a NULL column never satisfies them, `NotEquals` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterOperator {
    Equals,
    NotEquals,
    Like,
    IsNull,
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Equals => "equals",
            Self::NotEquals => "not-equals",
            Self::Like => "like",
            Self::IsNull => "is-null",
        };
        write!(f, "{label}")
    }
}

/// One committed filter condition.
///
/// `value` is present for every operator except `IsNull`. Like patterns are
/// carried verbatim with the SQL wildcard meanings, `%` for any run of
/// characters and `_` for exactly one; no escaping is applied on the way
/// in or out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    field: PredicateField,
    operator: FilterOperator,
    value: Option<String>,
}

impl Predicate {
    pub(crate) fn with_value(field: PredicateField, value: impl Into<String>) -> Self {
        Self {
            field,
            operator: field.operator(),
            value: Some(value.into()),
        }
    }

    pub(crate) fn without_value(field: PredicateField) -> Self {
        Self {
            field,
            operator: field.operator(),
            value: None,
        }
    }

    pub fn field(&self) -> PredicateField {
        self.field
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_is_implied_by_field() {
        assert_eq!(PredicateField::DeploymentId.operator(), FilterOperator::Equals);
        assert_eq!(PredicateField::DeploymentNameLike.operator(), FilterOperator::Like);
        assert_eq!(
            PredicateField::CategoryNotEquals.operator(),
            FilterOperator::NotEquals
        );
        assert_eq!(PredicateField::WithoutTenantId.operator(), FilterOperator::IsNull);
    }

    #[test]
    fn tenant_scoping_fields_are_flagged() {
        assert!(PredicateField::TenantId.is_tenant_scoping());
        assert!(PredicateField::TenantIdLike.is_tenant_scoping());
        assert!(PredicateField::WithoutTenantId.is_tenant_scoping());
        assert!(!PredicateField::DeploymentName.is_tenant_scoping());
        assert!(!PredicateField::ParentDeploymentIdLike.is_tenant_scoping());
    }

    #[test]
    fn with_value_carries_the_implied_operator() {
        let predicate = Predicate::with_value(PredicateField::TenantIdLike, "acme%");
        assert_eq!(predicate.field(), PredicateField::TenantIdLike);
        assert_eq!(predicate.operator(), FilterOperator::Like);
        assert_eq!(predicate.value(), Some("acme%"));
    }

    #[test]
    fn without_value_is_null_check_only() {
        let predicate = Predicate::without_value(PredicateField::WithoutTenantId);
        assert_eq!(predicate.operator(), FilterOperator::IsNull);
        assert_eq!(predicate.value(), None);
    }
}
