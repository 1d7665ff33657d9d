//! Create entity tables from their column catalogues. Idempotent (`IF NOT EXISTS`).

use crate::error::AppError;
use crate::models::{Character, Entity, Planet, User};
use crate::sql::quoted;
use sqlx::PgPool;

/// `CREATE TABLE IF NOT EXISTS` for one entity.
pub fn create_table_sql<E: Entity>() -> String {
    let col_defs: Vec<String> = E::COLUMNS
        .iter()
        .map(|c| {
            let mut def = format!("{} {}", quoted(c.name), c.sql_type);
            if !c.nullable {
                def.push_str(" NOT NULL");
            }
            if let Some(d) = c.default {
                def.push_str(" DEFAULT ");
                def.push_str(d);
            }
            def
        })
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quoted(E::TABLE),
        col_defs.join(",\n  ")
    )
}

/// Tables for users, characters and planets, in the connection's default schema.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in [
        create_table_sql::<User>(),
        create_table_sql::<Character>(),
        create_table_sql::<Planet>(),
    ] {
        tracing::debug!(sql = %ddl, "migration");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!("schema up to date");
    Ok(())
}
