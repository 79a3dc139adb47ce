use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::EventName;

/// Request payload for placing a bowler on a lane in an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EnrollRequest {
    #[validate(length(min = 1, max = 64))]
    pub bowler_name: String,

    #[validate(custom(function = "validate_event_name"))]
    pub event_name: String,

    #[validate(range(min = 1, message = "Division must be positive"))]
    pub division: i32,

    #[validate(range(min = 1, message = "Lane must be positive"))]
    pub lane: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollResponse {
    pub participation_id: i32,
}

fn validate_event_name(event_name: &str) -> Result<(), validator::ValidationError> {
    event_name
        .parse::<EventName>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_event_name"))
}
