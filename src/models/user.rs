use crate::models::{ColumnDef, Entity};
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Stored as submitted; never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

impl Entity for User {
    type New = NewUser;

    const TABLE: &'static str = "users";
    const NAME: &'static str = "user";
    const COLLECTION: &'static str = "users";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::required("id", "SERIAL PRIMARY KEY"),
        ColumnDef::required("email", "TEXT"),
        ColumnDef::required("password", "TEXT"),
        ColumnDef::required("is_active", "BOOLEAN").with_default("TRUE"),
    ];

    fn insert_values(new: NewUser) -> Vec<(&'static str, BindValue)> {
        vec![
            ("email", BindValue::Text(new.email)),
            ("password", BindValue::Text(new.password)),
            ("is_active", BindValue::Bool(true)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialization_omits_password() {
        let user = User {
            id: 1,
            email: "a@b.com".into(),
            password: "x".into(),
            is_active: true,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({"id": 1, "email": "a@b.com", "is_active": true}));
        assert!(value.get("password").is_none());
    }

    #[test]
    fn new_users_are_always_active() {
        let new = NewUser {
            email: "a@b.com".into(),
            password: "x".into(),
        };
        let values = User::insert_values(new);
        assert!(values
            .iter()
            .any(|(col, v)| *col == "is_active" && matches!(v, BindValue::Bool(true))));
    }
}
