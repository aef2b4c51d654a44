use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub rotation_period: Option<i32>, // in hours
    pub orbital_period: Option<i32>,  // in days
    pub diameter: Option<i32>,        // in km
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<f64>, // percent
    /// Free text; populations can exceed 32 bits or be "unknown".
    pub population: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(has_many)]
    pub residents: HasMany<super::character::Entity>,

    #[sea_orm(has_many, via = "planet_film")]
    pub films: HasMany<super::film::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
