use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::user;
use crate::error::{AppError, ErrorBody};
use crate::extractors::params::AppQuery;
use crate::favorites::FavoriteService;
use crate::models::favorite::{FavoriteResponse, UserQuery};
use crate::models::user::UserResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    operation_id = "listUsers",
    summary = "List all users",
    description = "Returns every user. Passwords are never included.",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = "Users",
    operation_id = "listUserFavorites",
    summary = "List a user's favorites",
    description = "Returns the raw favorite records of a user, ordered by ID. `user_id` defaults to 1.",
    params(UserQuery),
    responses(
        (status = 200, description = "Favorites of the user", body = Vec<FavoriteResponse>),
        (status = 400, description = "Malformed user_id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query), fields(user_id))]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UserQuery>,
) -> Result<Json<Vec<FavoriteResponse>>, AppError> {
    let user_id = query.user_id();
    tracing::Span::current().record("user_id", user_id);

    let service = FavoriteService::new(&state.db);
    if !service.user_exists(user_id).await? {
        return Err(AppError::NotFound("User not found".into()));
    }

    let favorites = service.list_for_user(user_id).await?;
    Ok(Json(favorites.into_iter().map(Into::into).collect()))
}
