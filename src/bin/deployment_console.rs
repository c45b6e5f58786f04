//! Seeds an in-memory deployment store and runs representative fluent
//! queries against it. Useful for eyeballing repository behavior without a
//! database.

use anyhow::Result;
use chrono::{Duration, Utc};
use formline_core::logging::{self, log_query_operation};
use formline_core::{
    FormDefinition, FormDeployment, FormDeploymentQuery, InMemoryDeploymentStore,
    RepositoryConfig,
};

fn seed_store() -> InMemoryDeploymentStore {
    let store = InMemoryDeploymentStore::new();
    let now = Utc::now().naive_utc();

    let deployments = [
        ("dep-1", Some("Invoice forms"), Some("finance"), Some("acme"), 4),
        ("dep-2", Some("Invoice forms"), Some("finance"), Some("acme"), 2),
        ("dep-3", Some("Onboarding forms"), Some("hr"), Some("globex"), 3),
        ("dep-4", Some("Survey forms"), None, None, 1),
        ("dep-5", Some("Invoice forms (draft)"), Some("draft"), Some("acme"), 0),
    ];
    for (id, name, category, tenant, age_days) in deployments {
        store.insert_deployment(FormDeployment {
            deployment_id: id.to_string(),
            name: name.map(str::to_string),
            category: category.map(str::to_string),
            tenant_id: tenant.map(str::to_string),
            parent_deployment_id: None,
            deployed_at: now - Duration::days(age_days),
        });
    }

    let definitions = [
        ("def-1", "dep-1", "invoice-claim", 1),
        ("def-2", "dep-2", "invoice-claim", 2),
        ("def-3", "dep-3", "employee-onboarding", 1),
        ("def-4", "dep-4", "customer-survey", 1),
    ];
    for (id, deployment_id, key, version) in definitions {
        store.insert_definition(FormDefinition {
            definition_id: id.to_string(),
            deployment_id: deployment_id.to_string(),
            definition_key: key.to_string(),
            name: None,
            version,
            tenant_id: None,
        });
    }

    store
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_structured_logging();
    let config = RepositoryConfig::from_env()?;
    let store = seed_store();
    tracing::info!(deployments = store.deployment_count(), "Seeded in-memory store");

    let invoice_query = FormDeploymentQuery::new()
        .deployment_name_like("Invoice%")?
        .deployment_category_not_equals("draft")?
        .order_by_deployment_time()?
        .desc()?;
    let invoices = invoice_query.list(&store).await?;
    log_query_operation(
        "list",
        invoice_query.predicates().len(),
        invoice_query.ordering().len(),
        Some(invoices.len()),
        "ok",
    );
    println!("{}", serde_json::to_string_pretty(&invoices)?);

    let untenanted_query = FormDeploymentQuery::new().deployment_without_tenant_id()?;
    let untenanted = untenanted_query.count(&store).await?;
    log_query_operation(
        "count",
        untenanted_query.predicates().len(),
        untenanted_query.ordering().len(),
        Some(untenanted as usize),
        "ok",
    );
    println!("deployments without a tenant: {untenanted}");

    let oldest_first = FormDeploymentQuery::new().order_by_deployment_time()?.asc()?;
    let first_page = oldest_first
        .list_page(&store, 0, config.default_page_size)
        .await?;
    log_query_operation(
        "list_page",
        oldest_first.predicates().len(),
        oldest_first.ordering().len(),
        Some(first_page.len()),
        "ok",
    );
    println!(
        "oldest deployment on the first page: {:?}",
        first_page.first().map(|deployment| &deployment.deployment_id)
    );

    let latest_invoice_bundle = FormDeploymentQuery::new()
        .form_definition_key("invoice-claim")?
        .order_by_deployment_time()?
        .desc()?
        .list_page(&store, 0, 1)
        .await?;
    println!(
        "newest deployment shipping invoice-claim: {:?}",
        latest_invoice_bundle
            .first()
            .map(|deployment| &deployment.deployment_id)
    );

    let survey_query = FormDeploymentQuery::new().form_definition_key("customer-survey")?;
    let survey = survey_query.single_result(&store).await?;
    log_query_operation(
        "single_result",
        survey_query.predicates().len(),
        survey_query.ordering().len(),
        Some(survey.iter().count()),
        "ok",
    );
    println!(
        "unique deployment shipping customer-survey: {:?}",
        survey.map(|deployment| deployment.deployment_id)
    );

    Ok(())
}
