//! Entity models: row types, create requests, and the column catalogue each
//! table is built from.

mod character;
mod planet;
mod quantity;
mod user;

pub use character::{Character, NewCharacter};
pub use planet::{NewPlanet, Planet};
pub use quantity::Quantity;
pub use user::{NewUser, User};

use crate::sql::BindValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// One column of an entity table. Used for DDL and for SELECT / RETURNING lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub nullable: bool,
    pub default: Option<&'static str>,
}

impl ColumnDef {
    pub const fn required(name: &'static str, sql_type: &'static str) -> Self {
        ColumnDef {
            name,
            sql_type,
            nullable: false,
            default: None,
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// A persisted record type exposed over HTTP.
///
/// `Serialize` is the public projection of a row; anything skipped there never
/// reaches a response body.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Typed create request, deserialized from the POST body.
    type New: DeserializeOwned + Send;

    const TABLE: &'static str;
    /// Singular route segment: `/user`, `/user/:id`.
    const NAME: &'static str;
    /// Plural route segment: `/users`.
    const COLLECTION: &'static str;
    const PRIMARY_KEY: &'static str = "id";
    /// Every column, primary key first.
    const COLUMNS: &'static [ColumnDef];

    /// Column/value pairs for an INSERT. The primary key is always generated.
    fn insert_values(new: Self::New) -> Vec<(&'static str, BindValue)>;
}
