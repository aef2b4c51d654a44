use std::net::SocketAddr;

use axum::ServiceExt;
use axum::extract::Request;
use chrono::NaiveDate;
use reqwest::Client;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use serde_json::Value;
use tempfile::TempDir;

use holonet_server::config::{AppConfig, CorsConfig, DatabaseConfig, LogConfig, ServerConfig};
use holonet_server::entity::favorite::ItemType;
use holonet_server::entity::{character, favorite, film, planet, user};
use holonet_server::state::AppState;

pub mod routes {
    pub const PEOPLE: &str = "/people";
    pub const PLANETS: &str = "/planets";
    pub const FILMS: &str = "/films";
    pub const USERS: &str = "/users";
    pub const USER_FAVORITES: &str = "/users/favorites";
    pub const OPENAPI: &str = "/api-docs/openapi.json";

    pub fn person(id: i32) -> String {
        format!("/people/{id}")
    }

    pub fn planet(id: i32) -> String {
        format!("/planets/{id}")
    }

    pub fn film(id: i32) -> String {
        format!("/films/{id}")
    }

    pub fn user_favorites(user_id: i32) -> String {
        format!("/users/favorites?user_id={user_id}")
    }

    pub fn favorite_planet(id: i32) -> String {
        format!("/favorite/planet/{id}")
    }

    pub fn favorite_person(id: i32) -> String {
        format!("/favorite/people/{id}")
    }
}

/// A running test server backed by its own SQLite file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    /// Keeps the database file alive for the lifetime of the test.
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let database = DatabaseConfig::new(db_url);
        let db = holonet_server::database::init_db(&database)
            .await
            .expect("Failed to initialize test database");

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig::default(),
            },
            database,
            log: LogConfig::default(),
        };

        let state = AppState {
            db: db.clone(),
            config: app_config,
        };

        let app = holonet_server::build_app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
                .await
                .unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// POST with no body at all.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// POST a raw, possibly malformed, body with the given content type.
    pub async fn post_raw(
        &self,
        path: &str,
        content_type: &str,
        body: &'static str,
    ) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Insert a user directly and return its `id`.
    pub async fn insert_user(&self, username: &str) -> i32 {
        user::ActiveModel {
            email: Set(format!("{username}@rebellion.org")),
            password: Set("secret".into()),
            username: Set(username.into()),
            first_name: Set(None),
            last_name: Set(None),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert user")
        .id
    }

    /// Insert a planet with a fixed `id`.
    pub async fn insert_planet_with_id(&self, id: i32, name: &str) -> i32 {
        planet::ActiveModel {
            id: Set(id),
            name: Set(name.into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert planet")
        .id
    }

    /// Insert a planet and return its `id`.
    pub async fn insert_planet(&self, name: &str) -> i32 {
        planet::ActiveModel {
            name: Set(name.into()),
            climate: Set(Some("arid".into())),
            surface_water: Set(Some(1.0)),
            population: Set(Some("200000".into())),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert planet")
        .id
    }

    /// Insert a character and return its `id`.
    pub async fn insert_character(&self, name: &str, homeworld_id: Option<i32>) -> i32 {
        character::ActiveModel {
            name: Set(name.into()),
            height: Set(Some(172.0)),
            birth_year: Set(Some("19BBY".into())),
            homeworld_id: Set(homeworld_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert character")
        .id
    }

    /// Insert a film and return its `id`.
    pub async fn insert_film(&self, title: &str, release_date: Option<NaiveDate>) -> i32 {
        film::ActiveModel {
            title: Set(title.into()),
            episode_id: Set(Some(4)),
            director: Set(Some("George Lucas".into())),
            release_date: Set(release_date.and_then(|d| d.and_hms_opt(0, 0, 0))),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert film")
        .id
    }

    /// Insert a favorite row directly, bypassing the API.
    pub async fn insert_favorite(&self, user_id: i32, item_type: ItemType, item_id: i32) {
        favorite::ActiveModel {
            user_id: Set(user_id),
            item_type: Set(item_type),
            item_id: Set(item_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("insert favorite");
    }

    pub async fn favorite_count(&self) -> u64 {
        favorite::Entity::find()
            .count(&self.db)
            .await
            .expect("count favorites")
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    /// Length of a JSON array body.
    pub fn len(&self) -> usize {
        self.body
            .as_array()
            .expect("response body should be an array")
            .len()
    }
}
