use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::film;
use crate::error::{AppError, ErrorBody};
use crate::extractors::params::AppPath;
use crate::models::catalog::FilmResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/films",
    tag = "Films",
    operation_id = "listFilms",
    summary = "List all films",
    responses(
        (status = 200, description = "List of films", body = Vec<FilmResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_films(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilmResponse>>, AppError> {
    let films = film::Entity::find()
        .order_by_asc(film::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(films.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/films/{id}",
    tag = "Films",
    operation_id = "getFilm",
    summary = "Get a film by ID",
    description = "`release_date` is formatted as `YYYY-MM-DD`, or null when unknown.",
    params(("id" = i32, Path, description = "Film ID")),
    responses(
        (status = 200, description = "Film details", body = FilmResponse),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Film not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_film(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<FilmResponse>, AppError> {
    let model = film::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Film not found".into()))?;

    Ok(Json(model.into()))
}
