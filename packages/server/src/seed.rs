use chrono::NaiveDate;
use sea_orm::*;
use tracing::info;

use crate::entity::favorite::ItemType;
use crate::entity::{character, character_film, favorite, film, planet, planet_film, user};

/// Row counts written by [`seed_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub planets: usize,
    pub characters: usize,
    pub films: usize,
    pub favorites: usize,
}

struct SeedUser {
    id: i32,
    email: &'static str,
    password: &'static str,
    username: &'static str,
    first_name: &'static str,
    last_name: &'static str,
}

const USERS: &[SeedUser] = &[
    SeedUser {
        id: 1,
        email: "luke@rebellion.org",
        password: "usetheforce",
        username: "luke_skywalker",
        first_name: "Luke",
        last_name: "Skywalker",
    },
    SeedUser {
        id: 2,
        email: "leia@rebellion.org",
        password: "alderaan",
        username: "princess_leia",
        first_name: "Leia",
        last_name: "Organa",
    },
];

/// Replace every table's contents with the fixture catalog.
///
/// Fixture rows carry fixed ids, so user 1 is always `luke_skywalker`
/// no matter how many times the catalog is reseeded.
///
/// Runs in one transaction: either the whole fixture set is written or the
/// previous contents are left untouched.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<SeedSummary, DbErr> {
    let txn = db.begin().await?;

    clear_all(&txn).await?;

    let mut users = Vec::with_capacity(USERS.len());
    for u in USERS {
        let model = user::ActiveModel {
            id: Set(u.id),
            email: Set(u.email.to_string()),
            password: Set(u.password.to_string()),
            username: Set(u.username.to_string()),
            first_name: Set(Some(u.first_name.to_string())),
            last_name: Set(Some(u.last_name.to_string())),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        users.push(model);
    }
    let (luke_user, leia_user) = (users[0].id, users[1].id);

    let tatooine = planet::ActiveModel {
        id: Set(1),
        name: Set("Tatooine".into()),
        rotation_period: Set(Some(23)),
        orbital_period: Set(Some(304)),
        diameter: Set(Some(10465)),
        climate: Set(Some("arid".into())),
        gravity: Set(Some("1 standard".into())),
        terrain: Set(Some("desert".into())),
        surface_water: Set(Some(1.0)),
        population: Set(Some("200000".into())),
        description: Set(Some("A harsh desert world orbiting twin suns".into())),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let alderaan = planet::ActiveModel {
        id: Set(2),
        name: Set("Alderaan".into()),
        rotation_period: Set(Some(24)),
        orbital_period: Set(Some(364)),
        diameter: Set(Some(12500)),
        climate: Set(Some("temperate".into())),
        gravity: Set(Some("1 standard".into())),
        terrain: Set(Some("grasslands, mountains".into())),
        surface_water: Set(Some(40.0)),
        population: Set(Some("2000000000".into())),
        description: Set(Some(
            "A peaceful world known for its beauty and democracy".into(),
        )),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let luke = character::ActiveModel {
        id: Set(1),
        name: Set("Luke Skywalker".into()),
        height: Set(Some(172.0)),
        mass: Set(Some(77.0)),
        hair_color: Set(Some("blond".into())),
        skin_color: Set(Some("fair".into())),
        eye_color: Set(Some("blue".into())),
        birth_year: Set(Some("19BBY".into())),
        gender: Set(Some("male".into())),
        description: Set(Some("Farm boy turned Jedi Knight".into())),
        homeworld_id: Set(Some(tatooine.id)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let leia = character::ActiveModel {
        id: Set(2),
        name: Set("Leia Organa".into()),
        height: Set(Some(150.0)),
        mass: Set(Some(49.0)),
        hair_color: Set(Some("brown".into())),
        skin_color: Set(Some("light".into())),
        eye_color: Set(Some("brown".into())),
        birth_year: Set(Some("19BBY".into())),
        gender: Set(Some("female".into())),
        description: Set(Some("Princess of Alderaan and Rebellion leader".into())),
        homeworld_id: Set(Some(alderaan.id)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let vader = character::ActiveModel {
        id: Set(3),
        name: Set("Darth Vader".into()),
        height: Set(Some(202.0)),
        mass: Set(Some(136.0)),
        hair_color: Set(Some("none".into())),
        skin_color: Set(Some("white".into())),
        eye_color: Set(Some("yellow".into())),
        birth_year: Set(Some("41.9BBY".into())),
        gender: Set(Some("male".into())),
        description: Set(Some("Dark Lord of the Sith".into())),
        homeworld_id: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let new_hope = film::ActiveModel {
        id: Set(1),
        title: Set("A New Hope".into()),
        episode_id: Set(Some(4)),
        opening_crawl: Set(Some("It is a period of civil war...".into())),
        director: Set(Some("George Lucas".into())),
        producer: Set(Some("Gary Kurtz, Rick McCallum".into())),
        release_date: Set(
            NaiveDate::from_ymd_opt(1977, 5, 25).and_then(|d| d.and_hms_opt(0, 0, 0)),
        ),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for character_id in [luke.id, leia.id, vader.id] {
        character_film::ActiveModel {
            character_id: Set(character_id),
            film_id: Set(new_hope.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }
    for planet_id in [tatooine.id, alderaan.id] {
        planet_film::ActiveModel {
            planet_id: Set(planet_id),
            film_id: Set(new_hope.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    let favorites = [
        (luke_user, ItemType::Character, vader.id),
        (luke_user, ItemType::Planet, tatooine.id),
        (leia_user, ItemType::Planet, alderaan.id),
    ];
    for (user_id, item_type, item_id) in favorites {
        favorite::ActiveModel {
            user_id: Set(user_id),
            item_type: Set(item_type),
            item_id: Set(item_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    let summary = SeedSummary {
        users: users.len(),
        planets: 2,
        characters: 3,
        films: 1,
        favorites: favorites.len(),
    };
    info!(
        users = summary.users,
        planets = summary.planets,
        characters = summary.characters,
        films = summary.films,
        favorites = summary.favorites,
        "Seeded fixture catalog"
    );
    Ok(summary)
}

/// Delete all rows, children before parents.
async fn clear_all<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    favorite::Entity::delete_many().exec(conn).await?;
    character_film::Entity::delete_many().exec(conn).await?;
    planet_film::Entity::delete_many().exec(conn).await?;
    character::Entity::delete_many().exec(conn).await?;
    planet::Entity::delete_many().exec(conn).await?;
    film::Entity::delete_many().exec(conn).await?;
    user::Entity::delete_many().exec(conn).await?;
    Ok(())
}
