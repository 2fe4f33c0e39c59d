use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope used for health, fallback and error bodies. Product routes
/// respond with bare views.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}
