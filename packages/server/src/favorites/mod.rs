pub mod service;

pub use service::{CreateResult, DeleteResult, FavoriteService, FavoriteTarget};
