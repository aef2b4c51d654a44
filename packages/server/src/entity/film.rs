use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    pub episode_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<DateTime>,

    #[sea_orm(has_many, via = "character_film")]
    pub characters: HasMany<super::character::Entity>,

    #[sea_orm(has_many, via = "planet_film")]
    pub planets: HasMany<super::planet::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
