use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub height: Option<f64>, // in cm
    pub mass: Option<f64>,   // in kg
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>, // e.g. "19BBY"
    pub gender: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub homeworld_id: Option<i32>,
    #[sea_orm(belongs_to, from = "homeworld_id", to = "id")]
    pub homeworld: HasOne<super::planet::Entity>,

    #[sea_orm(has_many, via = "character_film")]
    pub films: HasMany<super::film::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
