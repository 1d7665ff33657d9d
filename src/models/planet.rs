use crate::models::{ColumnDef, Entity, Quantity};
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    #[sqlx(json)]
    pub diameter: Quantity,
    #[sqlx(json)]
    pub mass: Quantity,
    #[sqlx(json)]
    pub orbit: Quantity,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub diameter: Quantity,
    pub mass: Quantity,
    pub orbit: Quantity,
}

impl Entity for Planet {
    type New = NewPlanet;

    const TABLE: &'static str = "planets";
    const NAME: &'static str = "planet";
    const COLLECTION: &'static str = "planets";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::required("id", "SERIAL PRIMARY KEY"),
        ColumnDef::required("name", "TEXT"),
        ColumnDef::required("diameter", "JSONB"),
        ColumnDef::required("mass", "JSONB"),
        ColumnDef::required("orbit", "JSONB"),
    ];

    fn insert_values(new: NewPlanet) -> Vec<(&'static str, BindValue)> {
        vec![
            ("name", BindValue::Text(new.name)),
            ("diameter", BindValue::Json(new.diameter.to_json())),
            ("mass", BindValue::Json(new.mass.to_json())),
            ("orbit", BindValue::Json(new.orbit.to_json())),
        ]
    }
}
