//! Generic CRUD execution against PostgreSQL. One statement per call, auto-committed.

use crate::catalog::TableDef;
use crate::error::AppError;
use crate::sql::{delete, insert, select_all, update, QueryBuf};
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashMap;

pub struct CrudService;

impl CrudService {
    /// All rows of the table in its configured order.
    pub async fn list(pool: &PgPool, table: &TableDef) -> Result<Vec<Value>, AppError> {
        let q = select_all(table);
        Self::query_many(pool, &q).await
    }

    /// Insert one row. Returns the row as stored.
    pub async fn create(
        pool: &PgPool,
        table: &TableDef,
        body: &HashMap<String, Value>,
    ) -> Result<Value, AppError> {
        let q = insert(table, body);
        let row = Self::query_optional(pool, &q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        Ok(row)
    }

    /// Replace the non-key columns of one row. Returns the number of rows affected.
    pub async fn update(
        pool: &PgPool,
        table: &TableDef,
        id: i64,
        body: &HashMap<String, Value>,
    ) -> Result<u64, AppError> {
        let q = update(table, id, body);
        Self::execute(pool, &q).await
    }

    /// Delete one row by key. Returns the number of rows affected.
    pub async fn delete(pool: &PgPool, table: &TableDef, id: i64) -> Result<u64, AppError> {
        let q = delete(table, id);
        Self::execute(pool, &q).await
    }

    pub(crate) async fn query_many(pool: &PgPool, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let rows = query.fetch_all(pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn query_optional(pool: &PgPool, q: &QueryBuf) -> Result<Option<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let row = query.fetch_optional(pool).await?;
        Ok(row.map(|r| row_to_json(&r)))
    }

    async fn execute(pool: &PgPool, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }
}

/// Row as a JSON object keyed by column name.
pub(crate) fn row_to_json(row: &sqlx::postgres::PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        let v = cell_to_value(row, name);
        map.insert(name.to_string(), v);
    }
    Value::Object(map)
}

fn cell_to_value(row: &sqlx::postgres::PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}
