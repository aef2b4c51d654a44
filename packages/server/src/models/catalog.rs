use serde::Serialize;

use super::shared::format_date;
use crate::entity::{character, film, planet};

#[derive(Serialize, utoipa::ToSchema)]
pub struct CharacterResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Luke Skywalker")]
    pub name: String,
    #[schema(example = 172.0)]
    pub height: Option<f64>,
    #[schema(example = 77.0)]
    pub mass: Option<f64>,
    #[schema(example = "blond")]
    pub hair_color: Option<String>,
    #[schema(example = "fair")]
    pub skin_color: Option<String>,
    #[schema(example = "blue")]
    pub eye_color: Option<String>,
    #[schema(example = "19BBY")]
    pub birth_year: Option<String>,
    #[schema(example = "male")]
    pub gender: Option<String>,
    pub description: Option<String>,
    /// Planet ID of the character's homeworld, if known.
    #[schema(example = 1)]
    pub homeworld_id: Option<i32>,
}

impl From<character::Model> for CharacterResponse {
    fn from(m: character::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            height: m.height,
            mass: m.mass,
            hair_color: m.hair_color,
            skin_color: m.skin_color,
            eye_color: m.eye_color,
            birth_year: m.birth_year,
            gender: m.gender,
            description: m.description,
            homeworld_id: m.homeworld_id,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PlanetResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Tatooine")]
    pub name: String,
    #[schema(example = 23)]
    pub rotation_period: Option<i32>,
    #[schema(example = 304)]
    pub orbital_period: Option<i32>,
    #[schema(example = 10465)]
    pub diameter: Option<i32>,
    #[schema(example = "arid")]
    pub climate: Option<String>,
    #[schema(example = "1 standard")]
    pub gravity: Option<String>,
    #[schema(example = "desert")]
    pub terrain: Option<String>,
    #[schema(example = 1.0)]
    pub surface_water: Option<f64>,
    #[schema(example = "200000")]
    pub population: Option<String>,
    pub description: Option<String>,
}

impl From<planet::Model> for PlanetResponse {
    fn from(m: planet::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            rotation_period: m.rotation_period,
            orbital_period: m.orbital_period,
            diameter: m.diameter,
            climate: m.climate,
            gravity: m.gravity,
            terrain: m.terrain,
            surface_water: m.surface_water,
            population: m.population,
            description: m.description,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct FilmResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "A New Hope")]
    pub title: String,
    #[schema(example = 4)]
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    #[schema(example = "George Lucas")]
    pub director: Option<String>,
    #[schema(example = "Gary Kurtz, Rick McCallum")]
    pub producer: Option<String>,
    /// Release date as `YYYY-MM-DD`.
    #[schema(example = "1977-05-25")]
    pub release_date: Option<String>,
}

impl From<film::Model> for FilmResponse {
    fn from(m: film::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            episode_id: m.episode_id,
            opening_crawl: m.opening_crawl,
            director: m.director,
            producer: m.producer,
            release_date: format_date(m.release_date),
        }
    }
}
