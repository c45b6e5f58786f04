use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// FormDeployment represents one immutable unit of deployed form resources.
/// A deployment is created whole, carries an engine-assigned id and deploy
/// time, and is never edited afterwards; replacing forms means creating a
/// new deployment. Maps to `formline_form_deployments` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FormDeployment {
    pub deployment_id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub tenant_id: Option<String>,
    pub parent_deployment_id: Option<String>,
    pub deployed_at: NaiveDateTime,
}

/// New FormDeployment for creation (without generated fields)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFormDeployment {
    pub name: Option<String>,
    pub category: Option<String>,
    pub tenant_id: Option<String>,
    pub parent_deployment_id: Option<String>,
}

impl FormDeployment {
    /// Insert a new deployment record, assigning its id and deploy time.
    pub async fn create(
        pool: &PgPool,
        new_deployment: NewFormDeployment,
    ) -> Result<FormDeployment, sqlx::Error> {
        let deployment = sqlx::query_as::<_, FormDeployment>(
            r#"
            INSERT INTO formline_form_deployments
                (deployment_id, name, category, tenant_id, parent_deployment_id, deployed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING deployment_id, name, category, tenant_id, parent_deployment_id, deployed_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(new_deployment.name)
        .bind(new_deployment.category)
        .bind(new_deployment.tenant_id)
        .bind(new_deployment.parent_deployment_id)
        .bind(Utc::now().naive_utc())
        .fetch_one(pool)
        .await?;

        Ok(deployment)
    }

    /// Find a deployment by its id.
    pub async fn find_by_id(
        pool: &PgPool,
        deployment_id: &str,
    ) -> Result<Option<FormDeployment>, sqlx::Error> {
        let deployment = sqlx::query_as::<_, FormDeployment>(
            r#"
            SELECT deployment_id, name, category, tenant_id, parent_deployment_id, deployed_at
            FROM formline_form_deployments
            WHERE deployment_id = $1
            "#,
        )
        .bind(deployment_id)
        .fetch_optional(pool)
        .await?;

        Ok(deployment)
    }

    /// Find every deployment carrying the given name. Deployment names are
    /// not unique across redeployments.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Vec<FormDeployment>, sqlx::Error> {
        let deployments = sqlx::query_as::<_, FormDeployment>(
            r#"
            SELECT deployment_id, name, category, tenant_id, parent_deployment_id, deployed_at
            FROM formline_form_deployments
            WHERE name = $1
            ORDER BY deployed_at DESC, deployment_id
            "#,
        )
        .bind(name)
        .fetch_all(pool)
        .await?;

        Ok(deployments)
    }

    /// List all deployments, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<FormDeployment>, sqlx::Error> {
        let deployments = sqlx::query_as::<_, FormDeployment>(
            r#"
            SELECT deployment_id, name, category, tenant_id, parent_deployment_id, deployed_at
            FROM formline_form_deployments
            ORDER BY deployed_at DESC, deployment_id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(deployments)
    }

    /// Change the category of an existing deployment. The category is the
    /// one deployment attribute that stays mutable after deploy.
    pub async fn update_category(
        pool: &PgPool,
        deployment_id: &str,
        category: Option<&str>,
    ) -> Result<Option<FormDeployment>, sqlx::Error> {
        let deployment = sqlx::query_as::<_, FormDeployment>(
            r#"
            UPDATE formline_form_deployments
            SET category = $2
            WHERE deployment_id = $1
            RETURNING deployment_id, name, category, tenant_id, parent_deployment_id, deployed_at
            "#,
        )
        .bind(deployment_id)
        .bind(category)
        .fetch_optional(pool)
        .await?;

        Ok(deployment)
    }

    /// Delete a deployment. Returns true when a row was removed.
    pub async fn delete(pool: &PgPool, deployment_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM formline_form_deployments
            WHERE deployment_id = $1
            "#,
        )
        .bind(deployment_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
