use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::Result;
use crate::models::{Bowler, Gender, NewBowler};

/// Entry of the bowler listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BowlerSummary {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub average: i32,
}

/// Full bowler record including the eligibility flags
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BowlerDetail {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub average: i32,
    pub is_senior: bool,
    pub is_vet: bool,
    pub is_in_all_events: bool,
    pub is_in_senior_all_events: bool,
}

/// `?id=all` (the default) or `?id=<bowler id>`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BowlerQuery {
    pub id: Option<String>,
}

/// Request payload for creating or replacing a bowler by name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertBowlerRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Name must be between 1 and 64 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(range(min = 0, max = 300, message = "Average must be between 0 and 300"))]
    pub average: i32,

    #[serde(default)]
    pub is_senior: bool,

    #[serde(default)]
    pub is_vet: bool,

    #[serde(default)]
    pub is_in_all_events: bool,

    #[serde(default)]
    pub is_in_senior_all_events: bool,
}

impl UpsertBowlerRequest {
    pub fn to_new_bowler(&self) -> Result<NewBowler> {
        Ok(NewBowler {
            name: self.name.clone(),
            gender: self.gender.parse()?,
            average: self.average,
            is_senior: self.is_senior,
            is_vet: self.is_vet,
            is_in_all_events: self.is_in_all_events,
            is_in_senior_all_events: self.is_in_senior_all_events,
        })
    }
}

fn validate_gender(gender: &str) -> std::result::Result<(), validator::ValidationError> {
    gender
        .parse::<Gender>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_gender"))
}

impl From<Bowler> for BowlerSummary {
    fn from(bowler: Bowler) -> Self {
        Self {
            id: bowler.bowler_id,
            name: bowler.name,
            gender: bowler.gender,
            average: bowler.average,
        }
    }
}

impl From<Bowler> for BowlerDetail {
    fn from(bowler: Bowler) -> Self {
        Self {
            id: bowler.bowler_id,
            name: bowler.name,
            gender: bowler.gender,
            average: bowler.average,
            is_senior: bowler.is_senior,
            is_vet: bowler.is_vet,
            is_in_all_events: bowler.is_in_all_events,
            is_in_senior_all_events: bowler.is_in_senior_all_events,
        }
    }
}
