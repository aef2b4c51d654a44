use chrono::NaiveDateTime;
use serde::Serialize;

/// Plain acknowledgement returned by mutating endpoints.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Planet added to favorites")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Format a stored timestamp as a `YYYY-MM-DD` date.
pub fn format_date(value: Option<NaiveDateTime>) -> Option<String> {
    value.map(|dt| dt.format("%Y-%m-%d").to_string())
}
