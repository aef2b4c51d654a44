use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::planet;
use crate::error::{AppError, ErrorBody};
use crate::extractors::params::AppPath;
use crate::models::catalog::PlanetResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/planets",
    tag = "Planets",
    operation_id = "listPlanets",
    summary = "List all planets",
    responses(
        (status = 200, description = "List of planets", body = Vec<PlanetResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, AppError> {
    let planets = planet::Entity::find()
        .order_by_asc(planet::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(planets.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = "Planets",
    operation_id = "getPlanet",
    summary = "Get a planet by ID",
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet details", body = PlanetResponse),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Planet not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PlanetResponse>, AppError> {
    let model = find_planet(&state.db, id).await?;
    Ok(Json(model.into()))
}

async fn find_planet<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<planet::Model, AppError> {
    planet::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))
}
