//! PostgreSQL-backed store plus database bootstrap.

use super::AnimalStore;
use crate::error::{AppError, ConfigError};
use crate::model::{Animal, AnimalFilter, NewAnimal};
use crate::sql::{self, bind_params, quote_ident, AnimalTable};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

#[derive(Clone)]
pub struct PgAnimalStore {
    pool: PgPool,
    table: AnimalTable,
}

impl PgAnimalStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgAnimalStore {
            pool,
            table: AnimalTable::new(schema),
        }
    }
}

#[async_trait]
impl AnimalStore for PgAnimalStore {
    async fn count(&self, filter: &AnimalFilter) -> Result<i64, AppError> {
        let q = sql::select_count(&self.table, filter);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let count = bind_params!(sqlx::query_scalar::<_, i64>(&q.sql), &q.params)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn page(&self, filter: &AnimalFilter, offset: i64, limit: i64) -> Result<Vec<Animal>, AppError> {
        let q = sql::select_page(&self.table, filter, offset, limit);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_params!(sqlx::query_as::<_, Animal>(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Option<Animal>, AppError> {
        let stmt = sql::select_by_id(&self.table);
        tracing::debug!(sql = %stmt, id, "query");
        let row = sqlx::query_as::<_, Animal>(&stmt)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let stmt = sql::exists_by_id(&self.table);
        tracing::debug!(sql = %stmt, id, "query");
        let exists: bool = sqlx::query_scalar(&stmt).bind(id).fetch_one(&self.pool).await?;
        Ok(exists)
    }

    async fn insert(&self, animal: &NewAnimal) -> Result<Animal, AppError> {
        let q = sql::insert(&self.table, &animal.species, &animal.name, animal.age);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_params!(sqlx::query_as::<_, Animal>(&q.sql), &q.params)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn replace(&self, animal: &Animal) -> Result<(), AppError> {
        let q = sql::replace(
            &self.table,
            animal.animal_id,
            &animal.species,
            &animal.name,
            animal.age,
        );
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_params!(sqlx::query(&q.sql), &q.params)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ConcurrencyConflict { id: animal.animal_id });
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let stmt = sql::delete(&self.table);
        tracing::debug!(sql = %stmt, id, "query");
        let result = sqlx::query(&stmt).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the schema and animals table if they do not exist yet.
pub async fn ensure_animals_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;
    let table = AnimalTable::new(schema);
    sqlx::query(&sql::create_table(&table)).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|_| invalid_url(database_url))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url.rfind('/').ok_or_else(|| invalid_url(url))? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn invalid_url(url: &str) -> AppError {
    AppError::Config(ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    })
}
