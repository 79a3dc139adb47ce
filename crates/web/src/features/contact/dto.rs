use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 128, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MailResponse {
    pub success: bool,
    pub message: String,
}

impl MailResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Email sent successfully".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
