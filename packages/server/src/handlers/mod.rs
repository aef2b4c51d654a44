pub mod favorite;
pub mod film;
pub mod people;
pub mod planet;
pub mod user;
