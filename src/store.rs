//! CompanyStore - data access for the company table
//!
//! Wraps a MySQL connection pool and runs the statements generated by
//! [`CompanyStatements`]. Listings accept a [`QueryMeta`] whose sort and paging
//! clause is validated against [`CompanyColumns`] before it reaches the SQL.

use sqlx::Row;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};

use crate::company::{Company, CompanyColumns};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::sql::query_meta::QueryMeta;
use crate::sql::sanitize::validate_identifier;
use crate::sql::statements::CompanyStatements;

/// Company data access over a MySQL pool
#[derive(Debug, Clone)]
pub struct CompanyStore {
    /// Database connection pool
    pool: MySqlPool,
    /// Store configuration
    config: StoreConfig,
}

impl CompanyStore {
    /// Create a new CompanyStore from configuration, connecting to the database
    pub async fn new(config: StoreConfig) -> Result<Self> {
        validate_identifier(&config.company_table).map_err(StoreError::Validation)?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .map_err(|e| StoreError::Connection(format!("Database connection failed: {}", e)))?;

        Ok(Self { pool, config })
    }

    /// Create a new CompanyStore from an existing pool
    pub fn from_pool(pool: MySqlPool, config: StoreConfig) -> Result<Self> {
        validate_identifier(&config.company_table).map_err(StoreError::Validation)?;
        Ok(Self { pool, config })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn statements(&self) -> CompanyStatements<'_> {
        CompanyStatements::new(&self.config)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Rename a company
    ///
    /// Fails with [`StoreError::NoRowsAffected`] when no row has the company's id.
    pub async fn edit_company(&self, company: &Company) -> Result<Company> {
        validate_name(&company.name)?;

        let sql = self.statements().update_name();
        tracing::debug!(id = company.id, "updating company");

        let result = sqlx::query(&sql)
            .bind(&company.name)
            .bind(company.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(id = company.id, "company update affected no rows");
            return Err(StoreError::no_rows_affected(format!(
                "update of company {}",
                company.id
            )));
        }

        Ok(company.clone())
    }

    /// Insert a company and return it as stored
    pub async fn insert_company(&self, name: &str) -> Result<Company> {
        validate_name(name)?;

        let sql = self.statements().insert();
        let result = sqlx::query(&sql).bind(name).execute(&self.pool).await?;

        let id = i64::try_from(result.last_insert_id()).map_err(|_| {
            StoreError::validation(format!(
                "insert id {} does not fit a company id",
                result.last_insert_id()
            ))
        })?;
        tracing::debug!(id, "inserted company");

        self.get_company_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found(format!("company {} after insert", id)))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All companies, ordered by name descending
    pub async fn get_all_companies(&self) -> Result<Vec<Company>> {
        let sql = self.statements().select_all();
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows_to_companies(&rows)
    }

    /// Companies whose name contains `name`, ordered by name ascending
    pub async fn get_companies_by_name(&self, name: &str) -> Result<Vec<Company>> {
        let sql = self.statements().select_name_contains();
        let rows = sqlx::query(&sql).bind(name).fetch_all(&self.pool).await?;
        rows_to_companies(&rows)
    }

    pub async fn get_company_by_id(&self, id: i64) -> Result<Option<Company>> {
        let sql = self.statements().select_by_id();
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_company).transpose()
    }

    pub async fn get_company_by_name(&self, name: &str) -> Result<Option<Company>> {
        let sql = self.statements().select_by_name();
        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_company).transpose()
    }

    /// Companies sorted and paged by `meta`
    ///
    /// Sort requests for columns other than `id` and `name` are ignored, as
    /// are malformed directions. A zero limit returns every row.
    pub async fn list_companies(&self, meta: &QueryMeta) -> Result<Vec<Company>> {
        let clause = meta.sql_clause(&CompanyColumns);
        let sql = self.statements().select_with_clause(&clause);
        tracing::debug!(sql = %sql, params = ?clause.params(), "listing companies");

        let rows = clause
            .bind_params(sqlx::query(&sql))
            .fetch_all(&self.pool)
            .await?;
        rows_to_companies(&rows)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::validation("Company name cannot be empty"));
    }
    Ok(())
}

fn row_to_company(row: &MySqlRow) -> Result<Company> {
    Ok(Company {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

/// Any row that fails to decode fails the whole listing
fn rows_to_companies(rows: &[MySqlRow]) -> Result<Vec<Company>> {
    rows.iter().map(row_to_company).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Acme").is_ok());
        assert!(matches!(validate_name(""), Err(StoreError::Validation(_))));
        assert!(matches!(validate_name("   "), Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_from_pool_rejects_bad_table_name() {
        let pool = MySqlPoolOptions::new()
            .connect_lazy("mysql://localhost/test")
            .unwrap();
        let config = StoreConfig::builder("mysql://localhost/test")
            .company_table("order")
            .build();

        let result = CompanyStore::from_pool(pool, config);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_from_pool_keeps_config() {
        let pool = MySqlPoolOptions::new()
            .connect_lazy("mysql://localhost/test")
            .unwrap();
        let config = StoreConfig::builder("mysql://localhost/test")
            .company_table("firms")
            .build();

        let store = CompanyStore::from_pool(pool, config).unwrap();
        assert_eq!(store.config().company_table, "firms");
    }
}
