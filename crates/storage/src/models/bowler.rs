use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Gender;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Bowler {
    pub bowler_id: i32,
    pub name: String,
    pub gender: Gender,
    pub average: i32,
    pub is_senior: bool,
    pub is_vet: bool,
    pub is_in_all_events: bool,
    pub is_in_senior_all_events: bool,
}

/// Every mutable bowler attribute, keyed by `name` when upserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBowler {
    pub name: String,
    pub gender: Gender,
    pub average: i32,
    pub is_senior: bool,
    pub is_vet: bool,
    pub is_in_all_events: bool,
    pub is_in_senior_all_events: bool,
}

impl NewBowler {
    pub fn new(name: impl Into<String>, gender: Gender, average: i32) -> Self {
        Self {
            name: name.into(),
            gender,
            average,
            is_senior: false,
            is_vet: false,
            is_in_all_events: false,
            is_in_senior_all_events: false,
        }
    }

    pub fn into_bowler(self, bowler_id: i32) -> Bowler {
        Bowler {
            bowler_id,
            name: self.name,
            gender: self.gender,
            average: self.average,
            is_senior: self.is_senior,
            is_vet: self.is_vet,
            is_in_all_events: self.is_in_all_events,
            is_in_senior_all_events: self.is_in_senior_all_events,
        }
    }
}
