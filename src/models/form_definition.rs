use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// FormDefinition represents one deployed, versioned form. Every definition
/// belongs to exactly one deployment; the engine assigns the version by
/// counting prior definitions with the same key in the same tenant. Maps to
/// `formline_form_definitions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FormDefinition {
    pub definition_id: String,
    pub deployment_id: String,
    pub definition_key: String,
    pub name: Option<String>,
    pub version: i32,
    pub tenant_id: Option<String>,
}

/// New FormDefinition for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFormDefinition {
    pub deployment_id: String,
    pub definition_key: String,
    pub name: Option<String>,
    pub version: i32,
    pub tenant_id: Option<String>,
}

impl FormDefinition {
    /// Insert a new definition record, assigning its id.
    pub async fn create(
        pool: &PgPool,
        new_definition: NewFormDefinition,
    ) -> Result<FormDefinition, sqlx::Error> {
        let definition = sqlx::query_as::<_, FormDefinition>(
            r#"
            INSERT INTO formline_form_definitions
                (definition_id, deployment_id, definition_key, name, version, tenant_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING definition_id, deployment_id, definition_key, name, version, tenant_id
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(new_definition.deployment_id)
        .bind(new_definition.definition_key)
        .bind(new_definition.name)
        .bind(new_definition.version)
        .bind(new_definition.tenant_id)
        .fetch_one(pool)
        .await?;

        Ok(definition)
    }

    /// Find a definition by its id.
    pub async fn find_by_id(
        pool: &PgPool,
        definition_id: &str,
    ) -> Result<Option<FormDefinition>, sqlx::Error> {
        let definition = sqlx::query_as::<_, FormDefinition>(
            r#"
            SELECT definition_id, deployment_id, definition_key, name, version, tenant_id
            FROM formline_form_definitions
            WHERE definition_id = $1
            "#,
        )
        .bind(definition_id)
        .fetch_optional(pool)
        .await?;

        Ok(definition)
    }

    /// Every definition shipped in the given deployment.
    pub async fn find_by_deployment(
        pool: &PgPool,
        deployment_id: &str,
    ) -> Result<Vec<FormDefinition>, sqlx::Error> {
        let definitions = sqlx::query_as::<_, FormDefinition>(
            r#"
            SELECT definition_id, deployment_id, definition_key, name, version, tenant_id
            FROM formline_form_definitions
            WHERE deployment_id = $1
            ORDER BY definition_key, version
            "#,
        )
        .bind(deployment_id)
        .fetch_all(pool)
        .await?;

        Ok(definitions)
    }

    /// The newest version of a form by key, scoped to one tenant when a
    /// tenant id is given and to tenant-less definitions otherwise.
    pub async fn find_latest_by_key(
        pool: &PgPool,
        definition_key: &str,
        tenant_id: Option<&str>,
    ) -> Result<Option<FormDefinition>, sqlx::Error> {
        let definition = match tenant_id {
            Some(tenant_id) => {
                sqlx::query_as::<_, FormDefinition>(
                    r#"
                    SELECT definition_id, deployment_id, definition_key, name, version, tenant_id
                    FROM formline_form_definitions
                    WHERE definition_key = $1 AND tenant_id = $2
                    ORDER BY version DESC
                    LIMIT 1
                    "#,
                )
                .bind(definition_key)
                .bind(tenant_id)
                .fetch_optional(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, FormDefinition>(
                    r#"
                    SELECT definition_id, deployment_id, definition_key, name, version, tenant_id
                    FROM formline_form_definitions
                    WHERE definition_key = $1 AND tenant_id IS NULL
                    ORDER BY version DESC
                    LIMIT 1
                    "#,
                )
                .bind(definition_key)
                .fetch_optional(pool)
                .await?
            }
        };

        Ok(definition)
    }

    /// Delete every definition shipped in the given deployment. Returns the
    /// number of rows removed.
    pub async fn delete_by_deployment(
        pool: &PgPool,
        deployment_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM formline_form_definitions
            WHERE deployment_id = $1
            "#,
        )
        .bind(deployment_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
