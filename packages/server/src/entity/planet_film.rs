use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planet_film")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub planet_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_id: i32,
    #[sea_orm(belongs_to, from = "planet_id", to = "id")]
    pub planet: HasOne<super::planet::Entity>,
    #[sea_orm(belongs_to, from = "film_id", to = "id")]
    pub film: HasOne<super::film::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
