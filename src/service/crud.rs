//! Generic CRUD execution against PostgreSQL.
//!
//! Reads borrow one pooled connection for a single statement. Writes run in a
//! transaction that commits on success; an early return drops it, which rolls back.

use crate::error::AppError;
use crate::models::Entity;
use crate::sql::{delete, insert, select_all, select_by_id, QueryBuf};
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;
use sqlx::PgPool;

pub struct CrudService;

impl CrudService {
    /// All rows ordered by primary key. Empty table yields an empty vec.
    pub async fn list<E: Entity>(pool: &PgPool) -> Result<Vec<E>, AppError> {
        let q = select_all::<E>();
        tracing::debug!(sql = %q.sql, "query");
        let rows = bind(&q).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one row by primary key.
    pub async fn read<E: Entity>(pool: &PgPool, id: i64) -> Result<Option<E>, AppError> {
        let q = select_by_id::<E>(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind(&q).fetch_optional(pool).await?;
        Ok(row)
    }

    /// Insert one row from a validated create request. Returns the stored row.
    pub async fn create<E: Entity>(pool: &PgPool, new: E::New) -> Result<E, AppError> {
        let q = insert::<E>(E::insert_values(new));
        tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
        let mut tx = pool.begin().await?;
        let row = bind(&q).fetch_one(&mut *tx).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Delete one row by id. Returns the removed row, or None when nothing matched.
    pub async fn delete<E: Entity>(pool: &PgPool, id: i64) -> Result<Option<E>, AppError> {
        let q = delete::<E>(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
        let mut tx = pool.begin().await?;
        let row = bind(&q).fetch_optional(&mut *tx).await?;
        tx.commit().await?;
        Ok(row)
    }
}

fn bind<E: Entity>(q: &QueryBuf) -> QueryAs<'_, Postgres, E, PgArguments> {
    let mut query = sqlx::query_as::<_, E>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}
