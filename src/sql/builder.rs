//! Builds parameterized SELECT, INSERT and DELETE statements for an entity.

use crate::models::Entity;
use crate::sql::BindValue;

/// Quote identifier for PostgreSQL (safe: only from the column catalogue).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn column_list<E: Entity>() -> String {
    E::COLUMNS
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by primary key.
pub fn select_all<E: Entity>() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list::<E>(),
        quoted(E::TABLE),
        quoted(E::PRIMARY_KEY)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id<E: Entity>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        column_list::<E>(),
        quoted(E::TABLE),
        quoted(E::PRIMARY_KEY),
        n
    );
    q
}

/// INSERT the given columns; the primary key is left to its sequence. Returns the full row.
pub fn insert<E: Entity>(values: Vec<(&'static str, BindValue)>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (name, value) in values {
        if name == E::PRIMARY_KEY {
            continue;
        }
        let n = q.push_param(value);
        cols.push(quoted(name));
        placeholders.push(format!("${}", n));
    }
    q.sql = if cols.is_empty() {
        format!(
            "INSERT INTO {} DEFAULT VALUES RETURNING {}",
            quoted(E::TABLE),
            column_list::<E>()
        )
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            quoted(E::TABLE),
            cols.join(", "),
            placeholders.join(", "),
            column_list::<E>()
        )
    };
    q
}

/// DELETE by id, returning the removed row.
pub fn delete<E: Entity>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${} RETURNING {}",
        quoted(E::TABLE),
        quoted(E::PRIMARY_KEY),
        n,
        column_list::<E>()
    );
    q
}
