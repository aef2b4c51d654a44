use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};

use crate::entity::favorite::{self, ItemType};
use crate::entity::{character, planet, user};

/// The catalog item a favorite points at.
///
/// Storage keeps `item_type` and `item_id` as two loose columns; this is the
/// checked form used everywhere above the entity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    pub fn item_type(self) -> ItemType {
        match self {
            FavoriteTarget::Character(_) => ItemType::Character,
            FavoriteTarget::Planet(_) => ItemType::Planet,
        }
    }

    pub fn item_id(self) -> i32 {
        match self {
            FavoriteTarget::Character(id) | FavoriteTarget::Planet(id) => id,
        }
    }

    /// Human-facing noun used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "Person",
            FavoriteTarget::Planet(_) => "Planet",
        }
    }
}

/// Result of attempting to add a favorite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateResult {
    Created(favorite::Model),
    /// The user already has this item in favorites.
    Duplicate,
}

/// Result of attempting to remove a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResult {
    Deleted,
    NotFound,
}

pub struct FavoriteService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn user_exists(&self, user_id: i32) -> Result<bool, DbErr> {
        Ok(user::Entity::find_by_id(user_id)
            .one(self.conn)
            .await?
            .is_some())
    }

    /// Whether the catalog row behind `target` exists.
    pub async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, DbErr> {
        let found = match target {
            FavoriteTarget::Character(id) => character::Entity::find_by_id(id)
                .one(self.conn)
                .await?
                .is_some(),
            FavoriteTarget::Planet(id) => planet::Entity::find_by_id(id)
                .one(self.conn)
                .await?
                .is_some(),
        };
        Ok(found)
    }

    /// All favorites of a user, oldest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<favorite::Model>, DbErr> {
        favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<favorite::Model>, DbErr> {
        favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::ItemType.eq(target.item_type()))
            .filter(favorite::Column::ItemId.eq(target.item_id()))
            .one(self.conn)
            .await
    }

    /// Insert a favorite unless the same (user, item_type, item_id) exists.
    ///
    /// The caller is expected to have checked that the user and the target
    /// exist. A unique-key violation from a concurrent insert is reported as
    /// `Duplicate`, same as the pre-check.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<CreateResult, DbErr> {
        if self.find(user_id, target).await?.is_some() {
            return Ok(CreateResult::Duplicate);
        }

        self.insert(user_id, target).await
    }

    /// Insert without the existence pre-check, relying on the
    /// `(user_id, item_type, item_id)` unique key alone.
    pub async fn insert(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<CreateResult, DbErr> {
        let model = favorite::ActiveModel {
            user_id: Set(user_id),
            item_type: Set(target.item_type()),
            item_id: Set(target.item_id()),
            ..Default::default()
        };

        match model.insert(self.conn).await {
            Ok(inserted) => Ok(CreateResult::Created(inserted)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(CreateResult::Duplicate)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, user_id: i32, target: FavoriteTarget) -> Result<DeleteResult, DbErr> {
        let result = favorite::Entity::delete_many()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::ItemType.eq(target.item_type()))
            .filter(favorite::Column::ItemId.eq(target.item_id()))
            .exec(self.conn)
            .await?;

        if result.rows_affected > 0 {
            Ok(DeleteResult::Deleted)
        } else {
            Ok(DeleteResult::NotFound)
        }
    }
}
