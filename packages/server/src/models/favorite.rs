use serde::{Deserialize, Serialize};

use crate::entity::favorite::{self, ItemType};

/// Acting user when a request does not name one.
pub const DEFAULT_USER_ID: i32 = 1;

/// Optional body for `POST /favorite/...`. The body itself may be omitted.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct FavoriteRequest {
    /// Acting user. Defaults to 1.
    #[schema(example = 1)]
    pub user_id: Option<i32>,
}

impl FavoriteRequest {
    pub fn user_id(&self) -> i32 {
        self.user_id.unwrap_or(DEFAULT_USER_ID)
    }
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Acting user. Defaults to 1.
    #[param(example = 1)]
    pub user_id: Option<i32>,
}

impl UserQuery {
    pub fn user_id(&self) -> i32 {
        self.user_id.unwrap_or(DEFAULT_USER_ID)
    }
}

/// A stored favorite, exactly as recorded.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FavoriteResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
    pub item_type: ItemType,
    /// Character ID or planet ID, depending on `item_type`.
    #[schema(example = 3)]
    pub item_id: i32,
}

impl From<favorite::Model> for FavoriteResponse {
    fn from(m: favorite::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            item_type: m.item_type,
            item_id: m.item_id,
        }
    }
}
