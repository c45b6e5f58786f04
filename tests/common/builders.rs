//! Test data builders for the deployment query suites.

#![allow(dead_code)] // Each suite uses its own subset of the builders.

use chrono::{NaiveDate, NaiveDateTime};
use formline_core::{FormDefinition, FormDeployment, InMemoryDeploymentStore};

/// Timestamp on a fixed May 2024 calendar, keyed by day of month so
/// ordering assertions read chronologically.
pub fn deployed_on(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Builder pattern for creating test FormDeployments
pub struct FormDeploymentBuilder {
    deployment_id: String,
    name: Option<String>,
    category: Option<String>,
    tenant_id: Option<String>,
    parent_deployment_id: Option<String>,
    deployed_at: NaiveDateTime,
}

impl FormDeploymentBuilder {
    pub fn new(deployment_id: &str) -> Self {
        Self {
            deployment_id: deployment_id.to_string(),
            name: None,
            category: None,
            tenant_id: None,
            parent_deployment_id: None,
            deployed_at: deployed_on(1),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_tenant(mut self, tenant_id: &str) -> Self {
        self.tenant_id = Some(tenant_id.to_string());
        self
    }

    pub fn with_parent(mut self, parent_deployment_id: &str) -> Self {
        self.parent_deployment_id = Some(parent_deployment_id.to_string());
        self
    }

    pub fn deployed_on_day(mut self, day: u32) -> Self {
        self.deployed_at = deployed_on(day);
        self
    }

    pub fn build(self) -> FormDeployment {
        FormDeployment {
            deployment_id: self.deployment_id,
            name: self.name,
            category: self.category,
            tenant_id: self.tenant_id,
            parent_deployment_id: self.parent_deployment_id,
            deployed_at: self.deployed_at,
        }
    }
}

/// Form definition record shipped inside the given deployment.
pub fn definition(
    definition_id: &str,
    deployment_id: &str,
    definition_key: &str,
    version: i32,
) -> FormDefinition {
    FormDefinition {
        definition_id: definition_id.to_string(),
        deployment_id: deployment_id.to_string(),
        definition_key: definition_key.to_string(),
        name: None,
        version,
        tenant_id: None,
    }
}

/// Store holding the fixed catalog the end-to-end suites assert against:
///
/// | id | name                | category | tenant   | day | parent |
/// |----|---------------------|----------|----------|-----|--------|
/// | d1 | Invoice 2023        | finance  | acme     | 1   | -      |
/// | d2 | Invoice 2024        | finance  | acme     | 3   | -      |
/// | d3 | Invoice 2024        | -        | globex   | 4   | -      |
/// | d4 | Expense claims      | finance  | acme     | 2   | -      |
/// | d5 | -                   | -        | -        | 5   | d2     |
/// | d6 | Invoice archive     | archived | "" empty | 6   | -      |
///
/// Definitions: invoice-claim v1 in d1, invoice-claim v2 in d2,
/// expense-claim v1 in d4, customer-survey v1 in d5.
pub fn seeded_store() -> InMemoryDeploymentStore {
    let store = InMemoryDeploymentStore::new();

    store.insert_deployment(
        FormDeploymentBuilder::new("d1")
            .with_name("Invoice 2023")
            .with_category("finance")
            .with_tenant("acme")
            .deployed_on_day(1)
            .build(),
    );
    store.insert_deployment(
        FormDeploymentBuilder::new("d2")
            .with_name("Invoice 2024")
            .with_category("finance")
            .with_tenant("acme")
            .deployed_on_day(3)
            .build(),
    );
    store.insert_deployment(
        FormDeploymentBuilder::new("d3")
            .with_name("Invoice 2024")
            .with_tenant("globex")
            .deployed_on_day(4)
            .build(),
    );
    store.insert_deployment(
        FormDeploymentBuilder::new("d4")
            .with_name("Expense claims")
            .with_category("finance")
            .with_tenant("acme")
            .deployed_on_day(2)
            .build(),
    );
    store.insert_deployment(
        FormDeploymentBuilder::new("d5")
            .with_parent("d2")
            .deployed_on_day(5)
            .build(),
    );
    store.insert_deployment(
        FormDeploymentBuilder::new("d6")
            .with_name("Invoice archive")
            .with_category("archived")
            .with_tenant("")
            .deployed_on_day(6)
            .build(),
    );

    store.insert_definition(definition("def-1", "d1", "invoice-claim", 1));
    store.insert_definition(definition("def-2", "d2", "invoice-claim", 2));
    store.insert_definition(definition("def-3", "d4", "expense-claim", 1));
    store.insert_definition(definition("def-4", "d5", "customer-survey", 1));

    store
}
