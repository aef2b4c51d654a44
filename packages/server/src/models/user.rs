use serde::Serialize;

use crate::entity::user;

/// Public projection of a user. The password column is never serialized.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "luke@rebellion.org")]
    pub email: String,
    #[schema(example = "luke_skywalker")]
    pub username: String,
    #[schema(example = "Luke")]
    pub first_name: Option<String>,
    #[schema(example = "Skywalker")]
    pub last_name: Option<String>,
    #[schema(example = true)]
    pub is_active: bool,
}

impl From<user::Model> for UserResponse {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            username: m.username,
            first_name: m.first_name,
            last_name: m.last_name,
            is_active: m.is_active,
        }
    }
}
