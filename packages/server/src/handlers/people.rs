use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::character;
use crate::error::{AppError, ErrorBody};
use crate::extractors::params::AppPath;
use crate::models::catalog::CharacterResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/people",
    tag = "People",
    operation_id = "listPeople",
    summary = "List all people",
    description = "Returns every character in the catalog, ordered by ID.",
    responses(
        (status = 200, description = "List of characters", body = Vec<CharacterResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>, AppError> {
    let people = character::Entity::find()
        .order_by_asc(character::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(people.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "People",
    operation_id = "getPerson",
    summary = "Get a person by ID",
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character details", body = CharacterResponse),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Person not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_person(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<CharacterResponse>, AppError> {
    let model = find_person(&state.db, id).await?;
    Ok(Json(model.into()))
}

async fn find_person<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<character::Model, AppError> {
    character::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".into()))
}
