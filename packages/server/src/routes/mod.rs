use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(catalog_routes())
        .merge(user_routes())
        .merge(favorite_routes())
}

fn catalog_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::people::list_people))
        .routes(routes!(handlers::people::get_person))
        .routes(routes!(handlers::planet::list_planets))
        .routes(routes!(handlers::planet::get_planet))
        .routes(routes!(handlers::film::list_films))
        .routes(routes!(handlers::film::get_film))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::user::list_users))
        .routes(routes!(handlers::user::list_user_favorites))
}

fn favorite_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::favorite::add_favorite_planet,
            handlers::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            handlers::favorite::add_favorite_person,
            handlers::favorite::remove_favorite_person
        ))
}
