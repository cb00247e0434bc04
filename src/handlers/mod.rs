pub mod bookings;
pub mod health;

use serde::Serialize;

/// Response envelope shared by every route, so the frontend renders
/// outcomes the same way regardless of which operation ran.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }

    pub fn success_with_message(data: T, message: &str) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            message: Some(message.to_string()),
            errors: None,
        }
    }
}
