use sea_orm::entity::prelude::*;
use sea_orm::prelude::StringLen;
use serde::{Deserialize, Serialize};

/// Which catalog table a favorite's `item_id` points into.
///
/// There is no foreign key on `item_id`; the tag is the only thing that says
/// whether it is a character id or a planet id.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[sea_orm(string_value = "character")]
    Character,
    #[sea_orm(string_value = "planet")]
    Planet,
}

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique_key = "favorite_target")]
    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,

    #[sea_orm(unique_key = "favorite_target")]
    pub item_type: ItemType,
    #[sea_orm(unique_key = "favorite_target")]
    pub item_id: i32,
}

impl ActiveModelBehavior for ActiveModel {}
