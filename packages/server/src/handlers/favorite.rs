use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::DatabaseConnection;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::OptionalJson;
use crate::extractors::params::{AppPath, AppQuery};
use crate::favorites::{CreateResult, DeleteResult, FavoriteService, FavoriteTarget};
use crate::models::favorite::{FavoriteRequest, UserQuery};
use crate::models::shared::MessageResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = "Favorites",
    operation_id = "addFavoritePlanet",
    summary = "Add a planet to a user's favorites",
    description = "The body is optional; `user_id` defaults to 1.",
    params(("id" = i32, Path, description = "Planet ID")),
    request_body(content = FavoriteRequest, description = "Acting user", content_type = "application/json"),
    responses(
        (status = 201, description = "Favorite created", body = MessageResponse),
        (status = 400, description = "Already in favorites (DUPLICATE) or malformed input (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Planet or user not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(user_id))]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    OptionalJson(payload): OptionalJson<FavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state.db, payload.user_id(), FavoriteTarget::Planet(id)).await
}

#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = "Favorites",
    operation_id = "addFavoritePerson",
    summary = "Add a person to a user's favorites",
    description = "The body is optional; `user_id` defaults to 1.",
    params(("id" = i32, Path, description = "Character ID")),
    request_body(content = FavoriteRequest, description = "Acting user", content_type = "application/json"),
    responses(
        (status = 201, description = "Favorite created", body = MessageResponse),
        (status = 400, description = "Already in favorites (DUPLICATE) or malformed input (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Person or user not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(user_id))]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    OptionalJson(payload): OptionalJson<FavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state.db, payload.user_id(), FavoriteTarget::Character(id)).await
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = "Favorites",
    operation_id = "removeFavoritePlanet",
    summary = "Remove a planet from a user's favorites",
    params(
        ("id" = i32, Path, description = "Planet ID"),
        UserQuery,
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 400, description = "Malformed input (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "User or favorite not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query), fields(user_id))]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppQuery(query): AppQuery<UserQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    remove_favorite(&state.db, query.user_id(), FavoriteTarget::Planet(id)).await
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = "Favorites",
    operation_id = "removeFavoritePerson",
    summary = "Remove a person from a user's favorites",
    params(
        ("id" = i32, Path, description = "Character ID"),
        UserQuery,
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 400, description = "Malformed input (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "User or favorite not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query), fields(user_id))]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppQuery(query): AppQuery<UserQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    remove_favorite(&state.db, query.user_id(), FavoriteTarget::Character(id)).await
}

async fn add_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    tracing::Span::current().record("user_id", user_id);
    let service = FavoriteService::new(db);

    if !service.target_exists(target).await? {
        return Err(AppError::NotFound(format!("{} not found", target.label())));
    }
    if !service.user_exists(user_id).await? {
        return Err(AppError::NotFound("User not found".into()));
    }

    match service.create(user_id, target).await? {
        CreateResult::Created(model) => {
            tracing::info!(favorite_id = model.id, ?target, "Favorite added");
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new(format!(
                    "{} added to favorites",
                    target.label()
                ))),
            ))
        }
        CreateResult::Duplicate => Err(AppError::Duplicate(format!(
            "{} already in favorites",
            target.label()
        ))),
    }
}

async fn remove_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::Span::current().record("user_id", user_id);
    let service = FavoriteService::new(db);

    if !service.user_exists(user_id).await? {
        return Err(AppError::NotFound("User not found".into()));
    }

    match service.delete(user_id, target).await? {
        DeleteResult::Deleted => Ok(Json(MessageResponse::new(format!(
            "{} removed from favorites",
            target.label()
        )))),
        DeleteResult::NotFound => Err(AppError::NotFound("Favorite not found".into())),
    }
}
