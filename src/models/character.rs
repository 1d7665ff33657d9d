use crate::models::{ColumnDef, Entity, Quantity};
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Character {
    pub id: i32,
    pub name: String,
    #[sqlx(json)]
    pub heigth: Quantity,
    #[sqlx(json)]
    pub weigth: Quantity,
    pub eyes_color: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub heigth: Quantity,
    pub weigth: Quantity,
    pub eyes_color: String,
}

impl Entity for Character {
    type New = NewCharacter;

    const TABLE: &'static str = "characters";
    const NAME: &'static str = "character";
    const COLLECTION: &'static str = "characters";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::required("id", "SERIAL PRIMARY KEY"),
        ColumnDef::required("name", "TEXT"),
        ColumnDef::required("heigth", "JSONB"),
        ColumnDef::required("weigth", "JSONB"),
        ColumnDef::required("eyes_color", "TEXT"),
    ];

    fn insert_values(new: NewCharacter) -> Vec<(&'static str, BindValue)> {
        vec![
            ("name", BindValue::Text(new.name)),
            ("heigth", BindValue::Json(new.heigth.to_json())),
            ("weigth", BindValue::Json(new.weigth.to_json())),
            ("eyes_color", BindValue::Text(new.eyes_color)),
        ]
    }
}
