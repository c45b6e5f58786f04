#![allow(dead_code)] // Each suite uses its own subset of the strategies.

use proptest::prelude::*;
use proptest::strategy::Just;

use formline_core::{FormDeployment, FormDeploymentQuery, Result};

use super::builders::deployed_on;

/// One value-bearing filter call that is safe to repeat within a query.
/// Tenant-scoping calls stay out on purpose: sequences built from these
/// never trip the mutual-exclusion rule.
#[derive(Debug, Clone)]
pub enum FilterCall {
    DeploymentId(String),
    Name(String),
    NameLike(String),
    Category(String),
    CategoryNotEquals(String),
    DefinitionKey(String),
    DefinitionKeyLike(String),
    ParentId(String),
    ParentIdLike(String),
}

impl FilterCall {
    pub fn apply(self, query: FormDeploymentQuery) -> Result<FormDeploymentQuery> {
        match self {
            Self::DeploymentId(value) => query.deployment_id(value),
            Self::Name(value) => query.deployment_name(value),
            Self::NameLike(value) => query.deployment_name_like(value),
            Self::Category(value) => query.deployment_category(value),
            Self::CategoryNotEquals(value) => query.deployment_category_not_equals(value),
            Self::DefinitionKey(value) => query.form_definition_key(value),
            Self::DefinitionKeyLike(value) => query.form_definition_key_like(value),
            Self::ParentId(value) => query.parent_deployment_id(value),
            Self::ParentIdLike(value) => query.parent_deployment_id_like(value),
        }
    }
}

/// Strategy for a single repeat-safe filter call.
pub fn filter_call_strategy() -> impl Strategy<Value = FilterCall> {
    let value = "[a-zA-Z0-9 %-]{0,12}";
    prop_oneof![
        value.prop_map(FilterCall::DeploymentId),
        value.prop_map(FilterCall::Name),
        value.prop_map(FilterCall::NameLike),
        value.prop_map(FilterCall::Category),
        value.prop_map(FilterCall::CategoryNotEquals),
        value.prop_map(FilterCall::DefinitionKey),
        value.prop_map(FilterCall::DefinitionKeyLike),
        value.prop_map(FilterCall::ParentId),
        value.prop_map(FilterCall::ParentIdLike),
    ]
}

/// Strategy for whole filter sequences.
pub fn filter_sequence_strategy() -> impl Strategy<Value = Vec<FilterCall>> {
    prop::collection::vec(filter_call_strategy(), 0..12)
}

/// Strategy for small deployment catalogs with deliberately colliding
/// attribute values, so filters and sort keys hit ties and absent values.
pub fn deployment_catalog_strategy() -> impl Strategy<Value = Vec<FormDeployment>> {
    let name = prop::option::of(prop_oneof![
        Just("Invoice 2024".to_string()),
        Just("Expense claims".to_string()),
        Just("Customer survey".to_string()),
    ]);
    let category = prop::option::of(prop_oneof![
        Just("finance".to_string()),
        Just("hr".to_string()),
    ]);
    let tenant = prop::option::of(prop_oneof![
        Just("acme".to_string()),
        Just("globex".to_string()),
        Just(String::new()),
    ]);
    prop::collection::vec((name, category, tenant, 1u32..=28), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, category, tenant_id, day))| FormDeployment {
                deployment_id: format!("dep-{index:03}"),
                name,
                category,
                tenant_id,
                parent_deployment_id: None,
                deployed_at: deployed_on(day),
            })
            .collect()
    })
}
