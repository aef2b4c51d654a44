pub mod character;
pub mod character_film;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod planet_film;
pub mod user;
